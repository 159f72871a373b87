//! benchtab - criterion benchmark comparison tables
//!
//! Reads criterion `sample.json` files, averages them with exact rational
//! arithmetic and renders a size-by-group comparison table.

use std::path::PathBuf;
use thiserror::Error;

pub mod config;
pub mod io;
pub mod models;
pub mod report;
pub mod stats;
pub mod util;

// Common error types
#[derive(Debug, Error)]
pub enum BenchTabError {
    /// Expected measurement file is absent
    #[error("Missing measurement record: {}", .0.display())]
    MissingRecord(PathBuf),
    /// Measurement file does not hold two equal-length positive sequences
    #[error("Malformed measurement record: {0}")]
    MalformedRecord(String),
    /// A sample reported zero iterations, or a record has no samples
    #[error("Division by zero: {0}")]
    DivisionByZero(String),
    /// Configuration validation or parsing error
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// I/O operation failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for BenchTabError {
    fn from(err: serde_json::Error) -> Self {
        BenchTabError::MalformedRecord(format!("JSON parsing error: {}", err))
    }
}

impl From<toml::de::Error> for BenchTabError {
    fn from(err: toml::de::Error) -> Self {
        BenchTabError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

/// Result type alias for benchtab operations
pub type Result<T> = std::result::Result<T, BenchTabError>;

/// Error handling utilities
pub mod error {
    use super::BenchTabError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &BenchTabError) -> String {
        match error {
            BenchTabError::MissingRecord(path) => format!(
                "No benchmark samples at {}. Run `cargo bench` first or check base_path/baseline.",
                path.display()
            ),
            BenchTabError::MalformedRecord(msg) => format!(
                "Benchmark samples are unreadable ({}). Re-run the benchmark to regenerate them.",
                msg
            ),
            BenchTabError::DivisionByZero(msg) => {
                format!("Cannot average samples: {}.", msg)
            }
            BenchTabError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your {}.", msg, super::CONFIG_FILE)
            }
            BenchTabError::IoError(_) => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "benchtab";
pub const CONFIG_FILE: &str = "benchtab.toml";
pub const DEFAULT_BASE_PATH: &str = "target/criterion";
pub const DEFAULT_BASELINE: &str = "new";
pub const SAMPLE_FILE: &str = "sample.json";
