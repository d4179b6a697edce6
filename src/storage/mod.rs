//! Storage layer for table records.
//!
//! This module writes the collected records as CSV tables and as an optional JSON
//! summary.

pub mod csv;
pub mod json;

// Re-export key types
pub use self::csv::CsvExporter;
pub use self::json::{render_json, write_json};
