//! Exact nanosecond durations

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::ToPrimitive;

use crate::util::units::format_duration;

/// An arbitrary-precision rational number of nanoseconds.
///
/// Displays through [`format_duration`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExactDuration(BigRational);

impl ExactDuration {
    /// Wrap a rational nanosecond value
    pub fn from_ratio(nanos: BigRational) -> Self {
        Self(nanos)
    }

    /// Whole number of nanoseconds
    pub fn from_nanos(nanos: u64) -> Self {
        Self(BigRational::from_integer(BigInt::from(nanos)))
    }

    /// `numer / denom` nanoseconds
    ///
    /// # Panics
    /// Panics if `denom` is zero.
    pub fn from_fraction(numer: i64, denom: i64) -> Self {
        Self(BigRational::new(BigInt::from(numer), BigInt::from(denom)))
    }

    /// The exact nanosecond value
    pub fn nanos(&self) -> &BigRational {
        &self.0
    }

    /// Nearest `f64`, for logging only
    pub fn approx_nanos(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for ExactDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration(self))
    }
}
