//! Measurement record data model
//!
//! A record is one criterion `sample.json`: per sample, how many iterations
//! ran and how long they took in total.

use num_bigint::BigInt;
use num_rational::BigRational;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use tracing::warn;

use crate::{BenchTabError, Result};

/// How criterion chose the iteration counts of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SamplingMode {
    Auto,
    Linear,
    Flat,
    #[serde(other)]
    Unknown,
}

/// Parallel iteration counts and elapsed nanoseconds for one (group, size)
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRecord {
    iterations: Vec<u64>,
    elapsed: Vec<BigRational>,
    sampling_mode: Option<SamplingMode>,
}

/// On-disk layout of `sample.json`
#[derive(Debug, Deserialize)]
struct RawSample {
    #[serde(default)]
    sampling_mode: Option<SamplingMode>,
    iters: Vec<Value>,
    times: Vec<Value>,
}

impl MeasurementRecord {
    /// Create a record from parallel sequences.
    ///
    /// Only the shape is checked here: both sequences must be non-empty
    /// and of equal length. Zero iteration counts are left for the
    /// averager to reject.
    pub fn new(iterations: Vec<u64>, elapsed: Vec<BigRational>) -> Result<Self> {
        if iterations.is_empty() || elapsed.is_empty() {
            return Err(BenchTabError::MalformedRecord(
                "record contains no samples".to_string(),
            ));
        }

        if iterations.len() != elapsed.len() {
            return Err(BenchTabError::MalformedRecord(format!(
                "{} iteration counts but {} elapsed times",
                iterations.len(),
                elapsed.len()
            )));
        }

        Ok(Self {
            iterations,
            elapsed,
            sampling_mode: None,
        })
    }

    /// Create a record from whole-nanosecond elapsed times
    pub fn from_integers(iterations: Vec<u64>, elapsed_ns: Vec<u64>) -> Result<Self> {
        let elapsed = elapsed_ns
            .into_iter()
            .map(|ns| BigRational::from_integer(BigInt::from(ns)))
            .collect();
        Self::new(iterations, elapsed)
    }

    /// Parse the contents of a criterion `sample.json`.
    ///
    /// Entries may be JSON integers or floats; floats are converted
    /// exactly. Every entry must be positive and iteration counts must be
    /// whole numbers.
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: RawSample = serde_json::from_str(content)?;

        if raw.sampling_mode == Some(SamplingMode::Unknown) {
            warn!("unrecognised sampling_mode in sample file");
        }

        let iterations = raw
            .iters
            .iter()
            .enumerate()
            .map(|(i, v)| parse_iteration_count(v).map_err(|e| malformed("iters", i, v, e)))
            .collect::<Result<Vec<_>>>()?;

        let elapsed = raw
            .times
            .iter()
            .enumerate()
            .map(|(i, v)| parse_elapsed(v).map_err(|e| malformed("times", i, v, e)))
            .collect::<Result<Vec<_>>>()?;

        let mut record = Self::new(iterations, elapsed)?;
        record.sampling_mode = raw.sampling_mode;
        Ok(record)
    }

    /// Iteration count per sample
    pub fn iterations(&self) -> &[u64] {
        &self.iterations
    }

    /// Cumulative elapsed nanoseconds per sample
    pub fn elapsed(&self) -> &[BigRational] {
        &self.elapsed
    }

    /// Sampling mode recorded by criterion, if any
    pub fn sampling_mode(&self) -> Option<SamplingMode> {
        self.sampling_mode
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.iterations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.iterations.is_empty()
    }

    /// (iterations, elapsed) pairs in sample order
    pub fn samples(&self) -> impl Iterator<Item = (u64, &BigRational)> + '_ {
        self.iterations.iter().copied().zip(self.elapsed.iter())
    }
}

fn malformed(field: &str, index: usize, value: &Value, reason: String) -> BenchTabError {
    BenchTabError::MalformedRecord(format!("{}[{}] = {}: {}", field, index, value, reason))
}

fn number(value: &Value) -> std::result::Result<&Number, String> {
    value.as_number().ok_or_else(|| "not a number".to_string())
}

fn parse_iteration_count(value: &Value) -> std::result::Result<u64, String> {
    let n = number(value)?;

    if let Some(count) = n.as_u64() {
        return if count == 0 {
            Err("iteration count must be positive".to_string())
        } else {
            Ok(count)
        };
    }

    // criterion writes counts as floats such as `10.0`
    match n.as_f64() {
        Some(f) if f.is_finite() && f >= 1.0 && f.fract() == 0.0 && f < u64::MAX as f64 => {
            Ok(f as u64)
        }
        Some(f) if f.is_finite() && f.fract() != 0.0 && f > 0.0 => {
            Err("iteration count must be a whole number".to_string())
        }
        Some(f) if f.is_finite() && f >= u64::MAX as f64 => {
            Err("iteration count out of range".to_string())
        }
        _ => Err("iteration count must be positive".to_string()),
    }
}

fn parse_elapsed(value: &Value) -> std::result::Result<BigRational, String> {
    let n = number(value)?;

    if let Some(ns) = n.as_u64() {
        return if ns == 0 {
            Err("elapsed time must be positive".to_string())
        } else {
            Ok(BigRational::from_integer(BigInt::from(ns)))
        };
    }

    match n.as_f64() {
        Some(f) if f.is_finite() && f > 0.0 => BigRational::from_float(f)
            .ok_or_else(|| "elapsed time is not representable".to_string()),
        _ => Err("elapsed time must be positive".to_string()),
    }
}
