//! Units formatting utilities
//!
//! Human-readable formatting of exact durations and size labels. All
//! rounding is done on the rational value itself, so no floating point
//! error can leak into the displayed digits.

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::models::ExactDuration;

const NANOS_PER_MICRO: u32 = 1_000;
const NANOS_PER_MILLI: u32 = 1_000_000;
const MILLIS_PER_SEC: u32 = 1_000;
const SECS_PER_MIN: u32 = 60;

fn ratio(n: u32) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

/// Round to the nearest integer, ties to even
///
/// # Examples
/// ```
/// use num_bigint::BigInt;
/// use num_rational::BigRational;
/// use benchtab::util::units::round_half_even;
///
/// let half = |n: i64| BigRational::new(BigInt::from(n), BigInt::from(2));
/// assert_eq!(round_half_even(&half(5)), BigInt::from(2));
/// assert_eq!(round_half_even(&half(7)), BigInt::from(4));
/// ```
pub fn round_half_even(value: &BigRational) -> BigInt {
    let floor = value.floor();
    let diff = value - &floor;
    let floor = floor.to_integer();
    let half = BigRational::new(BigInt::one(), BigInt::from(2));

    match diff.cmp(&half) {
        Ordering::Less => floor,
        Ordering::Greater => floor + BigInt::one(),
        Ordering::Equal => {
            if (&floor % BigInt::from(2)).is_zero() {
                floor
            } else {
                floor + BigInt::one()
            }
        }
    }
}

/// Format a rational with a fixed number of decimal places
///
/// # Examples
/// ```
/// use num_bigint::BigInt;
/// use num_rational::BigRational;
/// use benchtab::util::units::format_fixed;
///
/// let v = BigRational::new(BigInt::from(75), BigInt::from(2));
/// assert_eq!(format_fixed(&v, 2), "37.50");
/// assert_eq!(format_fixed(&v, 0), "38");
/// ```
pub fn format_fixed(value: &BigRational, decimals: usize) -> String {
    let scale: BigInt = num_traits::pow(BigInt::from(10), decimals);
    let scaled = round_half_even(&(value * BigRational::from_integer(scale.clone())));

    let sign = if scaled.is_negative() { "-" } else { "" };
    let magnitude = scaled.abs();
    let whole = &magnitude / &scale;

    if decimals == 0 {
        return format!("{}{}", sign, whole);
    }

    let frac = &magnitude % &scale;
    format!(
        "{}{}.{:0>width$}",
        sign,
        whole,
        frac.to_string(),
        width = decimals
    )
}

/// Format an exact duration using the ns / µs / ms / s / minute cascade
///
/// The first branch whose threshold the value falls under wins. Everything
/// below a minute shows two decimals; a minute or more shows whole
/// minutes and the remaining seconds rounded to the nearest integer
/// (ties to even) with no zero padding.
///
/// # Examples
/// ```
/// use benchtab::models::ExactDuration;
/// use benchtab::util::units::format_duration;
///
/// assert_eq!(format_duration(&ExactDuration::from_fraction(75, 2)), "37.50 ns");
/// assert_eq!(format_duration(&ExactDuration::from_nanos(1_000)), "1.00 µs");
/// assert_eq!(format_duration(&ExactDuration::from_nanos(125_000_000_000)), "2:5 m");
/// ```
pub fn format_duration(duration: &ExactDuration) -> String {
    let ns = duration.nanos();

    if ns < &ratio(NANOS_PER_MICRO) {
        return format!("{} ns", format_fixed(ns, 2));
    }

    if ns < &ratio(NANOS_PER_MILLI) {
        return format!("{} µs", format_fixed(&(ns / ratio(NANOS_PER_MICRO)), 2));
    }

    let ms = ns / ratio(NANOS_PER_MILLI);
    if ms < ratio(MILLIS_PER_SEC) {
        return format!("{} ms", format_fixed(&ms, 2));
    }

    let secs = ms / ratio(MILLIS_PER_SEC);
    if secs < ratio(SECS_PER_MIN) {
        return format!("{} s", format_fixed(&secs, 2));
    }

    let mut minutes = (&secs / ratio(SECS_PER_MIN)).to_integer();
    let remainder = secs - BigRational::from_integer(&minutes * BigInt::from(SECS_PER_MIN));
    let mut seconds = round_half_even(&remainder);

    // 59.5s rounds up into the next minute
    if seconds == BigInt::from(SECS_PER_MIN) {
        minutes += BigInt::one();
        seconds = BigInt::zero();
    }

    format!("{}:{} m", minutes, seconds)
}

/// Power-of-two label for a size exponent, e.g. `2^{3}`
///
/// # Examples
/// ```
/// use benchtab::util::units::format_size_label;
///
/// assert_eq!(format_size_label(3, false), "2^{3}");
/// assert_eq!(format_size_label(10, true), "$2^{10}$");
/// ```
pub fn format_size_label(exponent: u32, math: bool) -> String {
    if math {
        format!("$2^{{{}}}$", exponent)
    } else {
        format!("2^{{{}}}", exponent)
    }
}
