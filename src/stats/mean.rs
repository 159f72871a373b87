//! Exact mean time per iteration
//!
//! Every sample contributes `elapsed / iterations` as an exact fraction.
//! The fractions are summed and divided by the sample count without ever
//! leaving rational arithmetic.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use tracing::debug;

use crate::models::{ExactDuration, MeasurementRecord};
use crate::{BenchTabError, Result};

/// Mean nanoseconds per iteration across all samples of a record
pub fn mean_time_per_iteration(record: &MeasurementRecord) -> Result<ExactDuration> {
    if record.is_empty() {
        return Err(BenchTabError::DivisionByZero(
            "record contains no samples".to_string(),
        ));
    }

    let mut total = BigRational::zero();
    for (index, (iterations, elapsed)) in record.samples().enumerate() {
        if iterations == 0 {
            return Err(BenchTabError::DivisionByZero(format!(
                "sample {} ran zero iterations",
                index
            )));
        }
        total += elapsed / BigRational::from_integer(BigInt::from(iterations));
    }

    let mean = total / BigRational::from_integer(BigInt::from(record.len()));
    let mean = ExactDuration::from_ratio(mean);

    debug!(
        samples = record.len(),
        mean_ns = mean.approx_nanos(),
        "computed mean time per iteration"
    );

    Ok(mean)
}
