//! Results directory layout.
//!
//! Every path the tool reads or writes is derived from a [`ResultsLayout`] and an
//! explicit repository root. Defaults follow the upstream synthesis flow:
//!
//! ```text
//! <root>/syntesis/logical/results/<BITSx_SIZEy>/reports/async_fifo_area.rpt
//! <root>/syntesis/power/results/<BITSx_SIZEy>/power_evaluation.txt
//! <root>/syntesis/reports/   (outputs)
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::schema::ConfigTag;
use crate::{ReportError, ReportResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResultsLayout {
    /// Tree holding one directory per configuration with area reports.
    pub area_results: PathBuf,
    /// Tree holding one directory per configuration with power reports.
    pub power_results: PathBuf,
    /// Default output directory.
    pub reports: PathBuf,
    /// Area report path inside a configuration directory.
    pub area_report: PathBuf,
    /// Power report path inside a configuration directory.
    pub power_report: PathBuf,
}

impl Default for ResultsLayout {
    fn default() -> Self {
        ResultsLayout {
            area_results: PathBuf::from("syntesis/logical/results"),
            power_results: PathBuf::from("syntesis/power/results"),
            reports: PathBuf::from("syntesis/reports"),
            area_report: PathBuf::from("reports/async_fifo_area.rpt"),
            power_report: PathBuf::from("power_evaluation.txt"),
        }
    }
}

impl ResultsLayout {
    pub fn area_base(&self, root: &Path) -> PathBuf {
        root.join(&self.area_results)
    }

    pub fn power_base(&self, root: &Path) -> PathBuf {
        root.join(&self.power_results)
    }

    pub fn reports_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.reports)
    }

    pub fn area_report_path(&self, root: &Path, tag: &ConfigTag) -> PathBuf {
        self.area_base(root).join(tag.label()).join(&self.area_report)
    }

    pub fn power_report_path(&self, root: &Path, tag: &ConfigTag) -> PathBuf {
        self.power_base(root).join(tag.label()).join(&self.power_report)
    }
}

/// Load a layout override from a TOML file. Keys not present keep their defaults.
pub fn load_layout(path: &Path) -> ReportResult<ResultsLayout> {
    let s = std::fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
    toml::from_str(&s).map_err(|e| ReportError::Layout {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
