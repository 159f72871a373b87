//! Utility functions module
//!
//! Contains helper functions for duration and label formatting.

pub mod units;

// Re-export commonly used functions
pub use units::{format_duration, format_fixed, format_size_label, round_half_even};
