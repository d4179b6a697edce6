//! CSV export for area and power tables.

use std::io::Write;
use std::path::Path;

use crate::core::{Field, TableRecord, format_real};
use crate::{ReportError, ReportResult, ensure_dir};

/// CSV exporter for table records.
///
/// Writes a header row from `R::COLUMNS` followed by one row per record, in the order
/// given. Reals are written unrounded.
#[derive(Debug, Clone, Default)]
pub struct CsvExporter;

impl CsvExporter {
    /// Create a new CsvExporter.
    pub fn new() -> Self {
        CsvExporter
    }

    /// Export records to a CSV file, creating its parent directory if needed.
    ///
    /// # Errors
    /// Returns an error if file operations or CSV writing fails.
    pub fn export<R: TableRecord>(&self, records: &[R], output: &Path) -> ReportResult<()> {
        if let Some(parent) = output.parent() {
            ensure_dir(parent)?;
        }

        let file = std::fs::File::create(output).map_err(|e| ReportError::io(output, e))?;
        self.export_to_writer(records, file)
    }

    /// Export records to any writer implementing Write.
    pub fn export_to_writer<R: TableRecord, W: Write>(
        &self,
        records: &[R],
        writer: W,
    ) -> ReportResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(R::COLUMNS)?;
        for record in records {
            csv_writer.write_record(record_to_row(record))?;
        }

        csv_writer.flush().map_err(|e| ReportError::Csv(e.into()))?;
        Ok(())
    }
}

/// Convert a record to a row of CSV values.
fn record_to_row<R: TableRecord>(record: &R) -> Vec<String> {
    record
        .row()
        .into_iter()
        .map(|field| match field {
            Field::Text(s) => s,
            Field::Int(v) => v.to_string(),
            Field::Real(v) => format_real(v),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AREA_COLUMNS, AreaRecord, ConfigTag, POWER_COLUMNS, PowerRecord};

    fn area(bits: u32, size: u32) -> AreaRecord {
        AreaRecord {
            tag: ConfigTag::new(bits, size),
            cell_count: 42,
            cell_area_um2: 10.5,
            net_area_um2: 3.25,
            total_area_um2: 13.75,
        }
    }

    fn export_string<R: TableRecord>(records: &[R]) -> String {
        let mut buffer = Vec::new();
        CsvExporter::new().export_to_writer(records, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_area_csv_layout() {
        let csv_str = export_string(&[area(4, 8)]);
        let lines: Vec<&str> = csv_str.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], AREA_COLUMNS.join(","));
        assert_eq!(lines[1], "BITS4_SIZE8,4,8,42,10.5,3.25,13.75");
    }

    #[test]
    fn test_power_csv_keeps_full_precision() {
        let record = PowerRecord {
            tag: ConfigTag::new(8, 16),
            leakage_mw: 0.0012345,
            internal_mw: 4.5,
            switching_mw: 6.0,
            total_mw: 10.5012345,
        };
        let csv_str = export_string(&[record]);
        let lines: Vec<&str> = csv_str.lines().collect();
        assert_eq!(lines[0], POWER_COLUMNS.join(","));
        assert_eq!(lines[1], "BITS8_SIZE16,8,16,0.0012345,4.5,6.0,10.5012345");
    }

    #[test]
    fn test_export_empty_records() {
        let csv_str = export_string::<AreaRecord>(&[]);
        let lines: Vec<&str> = csv_str.lines().collect();
        assert_eq!(lines, vec![AREA_COLUMNS.join(",")]);
    }

    #[test]
    fn test_export_to_file_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("nested").join("area_table.csv");

        CsvExporter::new().export(&[area(4, 4), area(4, 8)], &output_path).unwrap();

        let contents = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(contents.lines().count(), 3);
        assert!(contents.contains("BITS4_SIZE4"));
    }
}
