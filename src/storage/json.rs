//! JSON export of both tables.

use std::path::Path;

use serde::Serialize;

use crate::collect::Collection;
use crate::core::{AreaRecord, PowerRecord};
use crate::{ReportError, ReportResult, ensure_dir};

#[derive(Debug, Serialize)]
struct JsonSummary<'a> {
    area: &'a [AreaRecord],
    power: &'a [PowerRecord],
}

/// Render both tables as a pretty-printed JSON document `{"area": [...], "power": [...]}`.
pub fn render_json(collection: &Collection) -> ReportResult<String> {
    let summary = JsonSummary {
        area: &collection.area,
        power: &collection.power,
    };
    Ok(serde_json::to_string_pretty(&summary)?)
}

/// Write the JSON summary to `output`, creating its parent directory if needed.
pub fn write_json(collection: &Collection, output: &Path) -> ReportResult<()> {
    if let Some(parent) = output.parent() {
        ensure_dir(parent)?;
    }
    let mut json = render_json(collection)?;
    json.push('\n');
    std::fs::write(output, json).map_err(|e| ReportError::io(output, e))
}
