//! Area report parsing.
//!
//! The row of interest is the top-level instance line of the area report:
//!
//! ```text
//!   Instance    Module   Cell Count  Cell Area  Net Area  Total Area
//! --------------------------------------------------------------------
//! async_fifo             1234        5678.901   234.567   5913.468
//! ```
//!
//! One optional token may sit between `async_fifo` and the cell count. The line must
//! end after the total area.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::read_report_lossy;
use crate::ReportResult;
use crate::core::{AreaRecord, ConfigTag};

static AREA_ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\s*async_fifo\s+(?:\S+\s+)?",
        r"(?P<cell_count>[0-9]+)\s+",
        r"(?P<cell_area>[0-9]+(?:\.[0-9]+)?)\s+",
        r"(?P<net_area>[0-9]+(?:\.[0-9]+)?)\s+",
        r"(?P<total_area>[0-9]+(?:\.[0-9]+)?)\s*$",
    ))
    .expect("area row pattern is valid")
});

/// Extract the first `async_fifo` row from report text.
pub fn parse_area_text(text: &str, tag: ConfigTag) -> Option<AreaRecord> {
    text.lines().find_map(|line| parse_area_line(line, tag))
}

fn parse_area_line(line: &str, tag: ConfigTag) -> Option<AreaRecord> {
    let caps = AREA_ROW_RE.captures(line)?;
    Some(AreaRecord {
        tag,
        cell_count: caps["cell_count"].parse().ok()?,
        cell_area_um2: caps["cell_area"].parse().ok()?,
        net_area_um2: caps["net_area"].parse().ok()?,
        total_area_um2: caps["total_area"].parse().ok()?,
    })
}

/// Parse the area report at `path`. Missing files and unmatched reports are `Ok(None)`.
pub fn parse_area_report(path: &Path, tag: ConfigTag) -> ReportResult<Option<AreaRecord>> {
    let Some(text) = read_report_lossy(path)? else {
        debug!(cfg = %tag, path = %path.display(), "area report missing");
        return Ok(None);
    };
    let record = parse_area_text(&text, tag);
    if record.is_none() {
        debug!(cfg = %tag, path = %path.display(), "no async_fifo row in area report");
    }
    Ok(record)
}
