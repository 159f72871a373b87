//! Statistics module
//!
//! Exact aggregation of measurement records.

pub mod mean;

pub use mean::mean_time_per_iteration;
