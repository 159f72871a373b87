//! Configuration management module
//!
//! Holds the declared report layout (which groups, which sizes, where the
//! samples live) and loads overrides from a TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{BenchTabError, Result, APP_NAME, CONFIG_FILE, DEFAULT_BASELINE, DEFAULT_BASE_PATH};

/// One benchmark group column in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkGroup {
    /// Column header shown in the table
    pub name: String,
    /// Directory name criterion uses for the group
    pub id: String,
}

impl BenchmarkGroup {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

/// Output style handed to the table renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    /// GitHub flavoured pipe table
    #[default]
    Markdown,
    /// Plain ASCII grid
    Ascii,
    /// PostgreSQL client style
    Psql,
    /// Rounded box drawing characters
    Rounded,
}

/// Report configuration: the fixed group and size tables plus sample location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Root of the criterion output tree
    pub base_path: PathBuf,
    /// Criterion baseline directory to read (`new` is the latest run)
    pub baseline: String,
    /// Header of the size column
    pub size_column: String,
    /// Size exponents, ascending
    pub sizes: Vec<u32>,
    /// Groups in column order
    pub groups: Vec<BenchmarkGroup>,
    /// Table output style
    pub style: TableStyle,
    /// Wrap size labels in `$...$` for LaTeX/MathJax renderers
    pub math_labels: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from(DEFAULT_BASE_PATH),
            baseline: DEFAULT_BASELINE.to_string(),
            size_column: "Database Size".to_string(),
            sizes: (3..10).collect(),
            groups: vec![
                BenchmarkGroup::new("Hash (Time)", "laconic_ot_commit"),
                BenchmarkGroup::new("Send (Time)", "laconic_ot_send"),
                BenchmarkGroup::new("Recv (Time)", "laconic_ot_recv"),
            ],
            style: TableStyle::Markdown,
            math_labels: false,
        }
    }
}

impl ReportConfig {
    /// Create a new report configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.base_path.as_os_str().is_empty() {
            return Err(BenchTabError::ConfigError(
                "Base path must not be empty".to_string(),
            ));
        }

        if self.baseline.is_empty() || has_separator(&self.baseline) {
            return Err(BenchTabError::ConfigError(format!(
                "Invalid baseline name: {:?}",
                self.baseline
            )));
        }

        if self.sizes.is_empty() {
            return Err(BenchTabError::ConfigError(
                "At least one input size is required".to_string(),
            ));
        }

        if let Some(pair) = self.sizes.windows(2).find(|w| w[0] >= w[1]) {
            return Err(BenchTabError::ConfigError(format!(
                "Sizes must be strictly ascending ({} is followed by {})",
                pair[0], pair[1]
            )));
        }

        if self.groups.is_empty() {
            return Err(BenchTabError::ConfigError(
                "At least one benchmark group is required".to_string(),
            ));
        }

        for group in &self.groups {
            if group.id.is_empty() || has_separator(&group.id) {
                return Err(BenchTabError::ConfigError(format!(
                    "Invalid group id {:?} for column {:?}",
                    group.id, group.name
                )));
            }
        }

        Ok(())
    }

    /// Set the criterion output root
    pub fn with_base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_path = path.into();
        self
    }

    /// Set the criterion baseline directory
    pub fn with_baseline(mut self, baseline: impl Into<String>) -> Self {
        self.baseline = baseline.into();
        self
    }

    /// Set the size column header
    pub fn with_size_column(mut self, label: impl Into<String>) -> Self {
        self.size_column = label.into();
        self
    }

    /// Set the size exponents
    pub fn with_sizes(mut self, sizes: Vec<u32>) -> Self {
        self.sizes = sizes;
        self
    }

    /// Set the group columns
    pub fn with_groups(mut self, groups: Vec<BenchmarkGroup>) -> Self {
        self.groups = groups;
        self
    }

    /// Set the table style
    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    /// Set whether size labels are wrapped as inline math
    pub fn with_math_labels(mut self, math: bool) -> Self {
        self.math_labels = math;
        self
    }

    /// Load configuration from the first config file found.
    /// Returns default configuration if no file exists.
    pub fn load() -> Result<Self> {
        for path in Self::candidate_paths() {
            if path.is_file() {
                info!(path = %path.display(), "loading configuration");
                return Self::load_from(&path);
            }
            debug!(path = %path.display(), "no configuration file");
        }

        info!("using built-in configuration");
        Ok(Self::default())
    }

    /// Load and validate configuration from a specific TOML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            BenchTabError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            BenchTabError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Config file locations in lookup order: working directory first,
    /// then `$CONFIG_HOME/benchtab/benchtab.toml`
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(APP_NAME).join(CONFIG_FILE));
        }
        paths
    }
}

fn has_separator(name: &str) -> bool {
    name.contains('/') || name.contains('\\') || name == "." || name == ".."
}
