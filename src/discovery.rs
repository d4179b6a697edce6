//! Configuration discovery over a results tree.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::core::ConfigTag;
use crate::{ReportError, ReportResult};

static CFG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^BITS([0-9]+)_SIZE([0-9]+)$").expect("configuration pattern is valid")
});

/// Decode a directory name of the form `BITS<bits>_SIZE<size>`.
///
/// Only canonical encodings are accepted: both numbers positive, no leading zeros,
/// so that `decode_config_name(name).map(|t| t.label())` always returns `name`.
pub fn decode_config_name(name: &str) -> Option<ConfigTag> {
    let caps = CFG_RE.captures(name)?;
    let bits = parse_positive(&caps[1])?;
    let size = parse_positive(&caps[2])?;
    Some(ConfigTag::new(bits, size))
}

fn parse_positive(digits: &str) -> Option<u32> {
    if digits.starts_with('0') {
        return None;
    }
    digits.parse::<u32>().ok()
}

/// List the configuration directories directly under `base`.
///
/// Entries that are not directories, or whose names do not decode, are skipped. A
/// missing `base` yields no configurations. The result is in no particular order.
pub fn discover_configs(base: &Path) -> ReportResult<Vec<ConfigTag>> {
    if !base.exists() {
        warn!(path = %base.display(), "results directory not found");
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(base).map_err(|e| ReportError::io(base, e))?;
    let mut tags = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ReportError::io(base, e))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name();
        match name.to_str().and_then(decode_config_name) {
            Some(tag) => {
                debug!(cfg = %tag, "discovered configuration");
                tags.push(tag);
            }
            None => debug!(name = %name.to_string_lossy(), "skipping directory"),
        }
    }
    Ok(tags)
}
