//! Markdown rendering of the synthesis summary.

use std::path::Path;

use crate::collect::Collection;
use crate::core::{Field, TableRecord, round_half_up};
use crate::{ReportError, ReportResult, ensure_dir};

/// Placeholder emitted instead of a table with no rows.
pub const NO_DATA: &str = "_No data found._";

/// Format a table cell for markdown. Reals are rounded to `precision` digits.
pub fn format_cell(field: &Field, precision: usize) -> String {
    match field {
        Field::Text(s) => s.clone(),
        Field::Int(v) => v.to_string(),
        Field::Real(v) => round_half_up(*v, precision),
    }
}

/// Render records as a pipe table, or the no-data placeholder when empty.
///
/// The returned text ends with a newline.
pub fn render_table<R: TableRecord>(records: &[R]) -> String {
    if records.is_empty() {
        return format!("{NO_DATA}\n");
    }

    let mut out = String::new();
    out.push_str(&format!("| {} |\n", R::COLUMNS.join(" | ")));
    out.push_str(&format!("| {} |\n", vec!["---"; R::COLUMNS.len()].join(" | ")));
    for record in records {
        let cells: Vec<String> = record
            .row()
            .iter()
            .map(|f| format_cell(f, R::MARKDOWN_PRECISION))
            .collect();
        out.push_str(&format!("| {} |\n", cells.join(" | ")));
    }
    out
}

/// Render the full `summary.md` document.
pub fn render_summary(collection: &Collection) -> String {
    let mut out = String::new();
    out.push_str("# Synthesis Summary\n\n");
    out.push_str("## Area Table\n\n");
    out.push_str(&render_table(&collection.area));
    out.push_str("\n## Power Table\n\n");
    out.push_str(&render_table(&collection.power));
    out
}

/// Write `summary.md` to `output`, creating its parent directory if needed.
pub fn write_summary(collection: &Collection, output: &Path) -> ReportResult<()> {
    if let Some(parent) = output.parent() {
        ensure_dir(parent)?;
    }
    std::fs::write(output, render_summary(collection)).map_err(|e| ReportError::io(output, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AreaRecord, ConfigTag, PowerRecord};

    fn area(cell_area_um2: f64) -> AreaRecord {
        AreaRecord {
            tag: ConfigTag::new(4, 8),
            cell_count: 42,
            cell_area_um2,
            net_area_um2: 3.25,
            total_area_um2: 13.75,
        }
    }

    fn power(leakage_mw: f64) -> PowerRecord {
        PowerRecord {
            tag: ConfigTag::new(4, 8),
            leakage_mw,
            internal_mw: 4.5,
            switching_mw: 6.7,
            total_mw: 12.4,
        }
    }

    #[test]
    fn test_area_table_rounds_to_three_digits() {
        let table = render_table(&[area(10.12345)]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(
            lines[0],
            "| cfg | bits | size | cell_count | cell_area_um2 | net_area_um2 | total_area_um2 |"
        );
        assert_eq!(lines[1], "| --- | --- | --- | --- | --- | --- | --- |");
        assert_eq!(lines[2], "| BITS4_SIZE8 | 4 | 8 | 42 | 10.123 | 3.250 | 13.750 |");
    }

    #[test]
    fn test_power_table_rounds_to_six_digits() {
        let table = render_table(&[power(0.0012345)]);
        let row = table.lines().nth(2).unwrap();
        assert_eq!(row, "| BITS4_SIZE8 | 4 | 8 | 0.001235 | 4.500000 | 6.700000 | 12.400000 |");
    }

    #[test]
    fn test_empty_table_is_placeholder() {
        assert_eq!(render_table::<AreaRecord>(&[]), "_No data found._\n");
    }

    #[test]
    fn test_summary_sections_in_order() {
        let collection = Collection {
            area: vec![area(1.0)],
            power: vec![],
        };
        let summary = render_summary(&collection);
        let area_at = summary.find("## Area Table").unwrap();
        let power_at = summary.find("## Power Table").unwrap();
        assert!(summary.starts_with("# Synthesis Summary\n\n"));
        assert!(area_at < power_at);
        assert!(summary.ends_with("## Power Table\n\n_No data found._\n"));
        assert_eq!(summary.matches(NO_DATA).count(), 1);
    }
}
