//! Generate the area and power tables for a repository.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::collect::collect_records;
use crate::core::ResultsLayout;
use crate::report::write_summary;
use crate::storage::{CsvExporter, write_json};
use crate::ReportResult;

pub const AREA_TABLE_FILE: &str = "area_table.csv";
pub const POWER_TABLE_FILE: &str = "power_table.csv";
pub const SUMMARY_FILE: &str = "summary.md";

/// Fully resolved invocation.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub repo_root: PathBuf,
    pub out_dir: PathBuf,
    pub layout: ResultsLayout,
    pub json: Option<PathBuf>,
}

impl ReportOptions {
    /// Options for `repo_root` with the default layout, writing into `<root>/<reports>`.
    pub fn for_root(repo_root: impl Into<PathBuf>) -> Self {
        let repo_root = repo_root.into();
        let layout = ResultsLayout::default();
        let out_dir = layout.reports_dir(&repo_root);
        ReportOptions {
            repo_root,
            out_dir,
            layout,
            json: None,
        }
    }
}

/// Files written and rows emitted by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    pub written: Vec<PathBuf>,
    pub area_rows: usize,
    pub power_rows: usize,
}

impl ReportOutcome {
    /// Confirmation lines printed on success.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .written
            .iter()
            .map(|p| format!("[OK] Wrote {}", p.display()))
            .collect();
        lines.push(format!("[INFO] area rows: {}", self.area_rows));
        lines.push(format!("[INFO] power rows: {}", self.power_rows));
        lines
    }
}

/// Collect both tables and write `area_table.csv`, `power_table.csv`, `summary.md`,
/// and the JSON summary when requested.
///
/// Each output is written independently; a failure leaves earlier outputs in place.
pub fn run(opts: &ReportOptions) -> ReportResult<ReportOutcome> {
    let collection = collect_records(&opts.repo_root, &opts.layout)?;
    let exporter = CsvExporter::new();
    let out: &Path = &opts.out_dir;
    let mut written = Vec::new();

    let area_path = out.join(AREA_TABLE_FILE);
    exporter.export(&collection.area, &area_path)?;
    info!(path = %area_path.display(), rows = collection.area.len(), "wrote area table");
    written.push(area_path);

    let power_path = out.join(POWER_TABLE_FILE);
    exporter.export(&collection.power, &power_path)?;
    info!(path = %power_path.display(), rows = collection.power.len(), "wrote power table");
    written.push(power_path);

    let summary_path = out.join(SUMMARY_FILE);
    write_summary(&collection, &summary_path)?;
    info!(path = %summary_path.display(), "wrote summary");
    written.push(summary_path);

    if let Some(json_path) = &opts.json {
        write_json(&collection, json_path)?;
        info!(path = %json_path.display(), "wrote JSON summary");
        written.push(json_path.clone());
    }

    Ok(ReportOutcome {
        written,
        area_rows: collection.area.len(),
        power_rows: collection.power.len(),
    })
}
