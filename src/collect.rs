//! Assembly of the area and power collections.

use std::path::Path;

use tracing::info;

use crate::ReportResult;
use crate::core::schema::sort_by_tag;
use crate::core::{AreaRecord, ConfigTag, PowerRecord, ResultsLayout};
use crate::discovery::discover_configs;
use crate::parse::{parse_area_report, parse_power_report};

/// Both tables, each sorted ascending by `(bits, size)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    pub area: Vec<AreaRecord>,
    pub power: Vec<PowerRecord>,
}

/// Collect area records for `tags`. Tags without a matching report are left out.
pub fn collect_area_records(
    root: &Path,
    layout: &ResultsLayout,
    tags: &[ConfigTag],
) -> ReportResult<Vec<AreaRecord>> {
    let mut records = Vec::new();
    for tag in tags {
        let path = layout.area_report_path(root, tag);
        if let Some(record) = parse_area_report(&path, *tag)? {
            records.push(record);
        }
    }
    sort_by_tag(&mut records);
    Ok(records)
}

/// Collect power records for `tags`. Tags without a matching report are left out.
pub fn collect_power_records(
    root: &Path,
    layout: &ResultsLayout,
    tags: &[ConfigTag],
) -> ReportResult<Vec<PowerRecord>> {
    let mut records = Vec::new();
    for tag in tags {
        let path = layout.power_report_path(root, tag);
        if let Some(record) = parse_power_report(&path, *tag)? {
            records.push(record);
        }
    }
    sort_by_tag(&mut records);
    Ok(records)
}

/// Discover configurations in each results tree and parse their reports.
///
/// Each table is built from the configurations found in its own tree, so coverage
/// of the two tables may differ.
pub fn collect_records(root: &Path, layout: &ResultsLayout) -> ReportResult<Collection> {
    let area_tags = discover_configs(&layout.area_base(root))?;
    let power_tags = discover_configs(&layout.power_base(root))?;

    let area = collect_area_records(root, layout, &area_tags)?;
    let power = collect_power_records(root, layout, &power_tags)?;
    info!(
        area_configs = area_tags.len(),
        power_configs = power_tags.len(),
        area_rows = area.len(),
        power_rows = power.len(),
        "collected synthesis results"
    );
    Ok(Collection { area, power })
}
