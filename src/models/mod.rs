//! Data models module
//!
//! Contains measurement records read from criterion, the exact duration
//! type they average to, and the report table structures.

pub mod duration;
pub mod record;
pub mod report;

// Re-export commonly used types
pub use duration::ExactDuration;
pub use record::{MeasurementRecord, SamplingMode};
pub use report::{ColumnAlignment, ReportCell, ReportRow, ReportTable};
