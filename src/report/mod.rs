//! Reporting module for the synthesis summary.
//!
//! Renders the collected area and power tables as a markdown document.

pub mod markdown;

// Re-export key types
pub use markdown::{NO_DATA, render_summary, render_table, write_summary};
