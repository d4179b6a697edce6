//! Line-pattern extraction from synthesis report files.
//!
//! Both parsers scan a report line by line and return the first matching row. A
//! missing file or a file with no matching row is `Ok(None)`, not an error. Only
//! the first match is used; a report with several candidate rows contributes its
//! first one.

pub mod area;
pub mod power;

use std::path::Path;

use crate::{ReportError, ReportResult};

pub use area::{parse_area_report, parse_area_text};
pub use power::{parse_power_report, parse_power_text};

/// Read a report as text, replacing invalid UTF-8 sequences. Returns `None` if the
/// file does not exist, including when a parent component is not a directory.
pub fn read_report_lossy(path: &Path) -> ReportResult<Option<String>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(e)
            if matches!(
                e.kind(),
                std::io::ErrorKind::NotFound | std::io::ErrorKind::NotADirectory
            ) =>
        {
            Ok(None)
        }
        Err(e) => Err(ReportError::io(path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_report_lossy(&dir.path().join("nope.rpt")).unwrap().is_none());
    }

    #[test]
    fn test_read_below_regular_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("BITS8_SIZE4");
        std::fs::write(&file, b"stray").unwrap();
        assert!(read_report_lossy(&file.join("power_evaluation.txt")).unwrap().is_none());
    }

    #[test]
    fn test_read_tolerates_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("r.rpt");
        std::fs::write(&path, b"head\xff\xfe\nasync_fifo 1 2.0 3.0 5.0\n").unwrap();
        let text = read_report_lossy(&path).unwrap().unwrap();
        assert!(text.contains("async_fifo 1 2.0 3.0 5.0"));
        assert!(text.starts_with("head"));
    }
}
