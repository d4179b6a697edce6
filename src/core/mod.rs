//! Core types for synth-report.
//!
//! This module contains the configuration tag, the two record kinds extracted from
//! synthesis reports, the results directory layout, and number formatting shared by
//! the CSV and markdown emitters.

pub mod layout;
pub mod number;
pub mod schema;

// Re-export key types for convenience
pub use layout::{ResultsLayout, load_layout};
pub use number::{format_real, round_half_up};
pub use schema::{
    AREA_COLUMNS, AreaRecord, ConfigTag, Field, POWER_COLUMNS, PowerRecord, TableRecord,
};
