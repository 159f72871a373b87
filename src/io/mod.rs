//! I/O operations module
//!
//! Locates and parses criterion sample files.

pub mod reader;

pub use reader::{RecordSource, SampleReader};
