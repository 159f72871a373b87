//! Sample file reader
//!
//! Criterion keeps one `sample.json` per benchmark at
//! `<base>/<group>/<size>/<baseline>/sample.json`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::ReportConfig;
use crate::models::MeasurementRecord;
use crate::{BenchTabError, Result, DEFAULT_BASELINE, SAMPLE_FILE};

/// Anything that can produce the measurement record for a (group, size)
pub trait RecordSource {
    /// Load the record for one benchmark group at one input size
    fn read_record(&self, group_id: &str, size: u32) -> Result<MeasurementRecord>;
}

/// Reads records from a criterion output directory
#[derive(Debug, Clone)]
pub struct SampleReader {
    base_path: PathBuf,
    baseline: String,
}

impl SampleReader {
    /// Reader for the latest run (`new` baseline) under `base_path`
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            baseline: DEFAULT_BASELINE.to_string(),
        }
    }

    /// Reader matching a report configuration
    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new(config.base_path.clone()).with_baseline(config.baseline.clone())
    }

    /// Read a named criterion baseline instead of the latest run
    pub fn with_baseline(mut self, baseline: impl Into<String>) -> Self {
        self.baseline = baseline.into();
        self
    }

    /// Expected location of the sample file for a (group, size)
    pub fn record_path(&self, group_id: &str, size: u32) -> PathBuf {
        self.base_path
            .join(group_id)
            .join(size.to_string())
            .join(&self.baseline)
            .join(SAMPLE_FILE)
    }

    /// Parse a sample file already in memory, tagging errors with `origin`
    pub fn parse_record(content: &str, origin: &Path) -> Result<MeasurementRecord> {
        MeasurementRecord::from_json(content).map_err(|err| match err {
            BenchTabError::MalformedRecord(msg) => {
                BenchTabError::MalformedRecord(format!("{}: {}", origin.display(), msg))
            }
            other => other,
        })
    }
}

impl RecordSource for SampleReader {
    fn read_record(&self, group_id: &str, size: u32) -> Result<MeasurementRecord> {
        let path = self.record_path(group_id, size);
        debug!(path = %path.display(), "reading sample file");

        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => BenchTabError::MissingRecord(path.clone()),
            _ => BenchTabError::IoError(e),
        })?;

        let record = Self::parse_record(&content, &path)?;
        debug!(
            group = group_id,
            size,
            samples = record.len(),
            mode = ?record.sampling_mode(),
            "parsed sample file"
        );

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_sample(base: &Path, group: &str, size: u32, baseline: &str, content: &str) {
        let dir = base.join(group).join(size.to_string()).join(baseline);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(SAMPLE_FILE), content).unwrap();
    }

    #[test]
    fn test_record_path_layout() {
        let reader = SampleReader::new("target/criterion");
        assert_eq!(
            reader.record_path("laconic_ot_send", 7),
            PathBuf::from("target/criterion/laconic_ot_send/7/new/sample.json")
        );

        let reader = reader.with_baseline("main");
        assert_eq!(
            reader.record_path("g", 3),
            PathBuf::from("target/criterion/g/3/main/sample.json")
        );
    }

    #[test]
    fn test_read_record() {
        let temp_dir = TempDir::new().unwrap();
        write_sample(
            temp_dir.path(),
            "hash",
            3,
            "new",
            r#"{"sampling_mode":"Flat","iters":[1.0,1.0],"times":[30.0,50.0]}"#,
        );

        let reader = SampleReader::new(temp_dir.path());
        let record = reader.read_record("hash", 3).unwrap();
        assert_eq!(record.iterations(), &[1, 1]);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_read_record_from_baseline() {
        let temp_dir = TempDir::new().unwrap();
        write_sample(temp_dir.path(), "hash", 3, "base", r#"{"iters":[1],"times":[9]}"#);

        let config = ReportConfig::new()
            .with_base_path(temp_dir.path())
            .with_baseline("base");
        let reader = SampleReader::from_config(&config);
        assert!(reader.read_record("hash", 3).is_ok());

        let latest = SampleReader::new(temp_dir.path());
        assert!(matches!(
            latest.read_record("hash", 3),
            Err(BenchTabError::MissingRecord(_))
        ));
    }

    #[test]
    fn test_missing_record() {
        let temp_dir = TempDir::new().unwrap();
        let reader = SampleReader::new(temp_dir.path());

        match reader.read_record("absent", 4) {
            Err(BenchTabError::MissingRecord(path)) => {
                assert_eq!(path, reader.record_path("absent", 4));
            }
            other => panic!("expected MissingRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_record_names_file() {
        let temp_dir = TempDir::new().unwrap();
        write_sample(temp_dir.path(), "recv", 5, "new", r#"{"iters":[1,2],"times":[3]}"#);

        let reader = SampleReader::new(temp_dir.path());
        let err = reader.read_record("recv", 5).unwrap_err();
        assert!(matches!(err, BenchTabError::MalformedRecord(_)));
        assert!(err.to_string().contains("sample.json"));
    }
}
