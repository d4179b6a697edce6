//! Power report parsing.
//!
//! The `Subtotal` row carries leakage, internal, switching and total power, in that
//! order. Whitespace-separated text after the fourth value is ignored; the total
//! itself must be followed by whitespace or end of line.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::read_report_lossy;
use crate::ReportResult;
use crate::core::{ConfigTag, PowerRecord};

static SUBTOTAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let num = r"[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?";
    Regex::new(&format!(
        r"^\s*Subtotal\s+(?P<leakage>{num})\s+(?P<internal>{num})\s+(?P<switching>{num})\s+(?P<total>{num})(?:\s|$)"
    ))
    .expect("subtotal pattern is valid")
});

/// Extract the first `Subtotal` row from report text.
pub fn parse_power_text(text: &str, tag: ConfigTag) -> Option<PowerRecord> {
    text.lines().find_map(|line| parse_power_line(line, tag))
}

fn parse_power_line(line: &str, tag: ConfigTag) -> Option<PowerRecord> {
    let caps = SUBTOTAL_RE.captures(line)?;
    Some(PowerRecord {
        tag,
        leakage_mw: caps["leakage"].parse().ok()?,
        internal_mw: caps["internal"].parse().ok()?,
        switching_mw: caps["switching"].parse().ok()?,
        total_mw: caps["total"].parse().ok()?,
    })
}

/// Parse the power report at `path`. Missing files and unmatched reports are `Ok(None)`.
pub fn parse_power_report(path: &Path, tag: ConfigTag) -> ReportResult<Option<PowerRecord>> {
    let Some(text) = read_report_lossy(path)? else {
        debug!(cfg = %tag, path = %path.display(), "power report missing");
        return Ok(None);
    };
    let record = parse_power_text(&text, tag);
    if record.is_none() {
        debug!(cfg = %tag, path = %path.display(), "no Subtotal row in power report");
    }
    Ok(record)
}
