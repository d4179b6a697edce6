pub mod core;
pub mod discovery;
pub mod parse;
pub mod collect;
pub mod storage;
pub mod report;
pub mod report_cmd;

use std::path::PathBuf;

use thiserror::Error;

pub use crate::core::{AreaRecord, ConfigTag, PowerRecord, ResultsLayout, TableRecord};
pub use crate::collect::{Collection, collect_area_records, collect_power_records, collect_records};
pub use crate::report_cmd::{ReportOptions, ReportOutcome};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid layout file {}: {message}", path.display())]
    Layout { path: PathBuf, message: String },
    #[error("failed to serialize JSON summary: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Message(String),
}

impl ReportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Io { path: path.into(), source }
    }
}

pub type ReportResult<T> = Result<T, ReportError>;

/// Create `path` and its parents unless it already exists.
pub(crate) fn ensure_dir(path: &std::path::Path) -> ReportResult<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| ReportError::io(path, e))?;
    }
    Ok(())
}
