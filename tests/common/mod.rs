//! Shared fixture tree for integration tests.

use std::path::Path;

use synth_report::core::{ConfigTag, ResultsLayout};

pub const AREA_REPORT_BITS4_SIZE4: &str = "\
============================================================
  Generated by:           Genus(TM) Synthesis Solution
  Module:                 async_fifo
============================================================

  Instance    Module   Cell Count  Cell Area  Net Area  Total Area
--------------------------------------------------------------------
async_fifo                    210   812.4455   95.1222    907.5677
  u_rptr      rptr_empty       48   180.2000   20.1000    200.3000
";

pub const POWER_REPORT_BITS4_SIZE4: &str = "\
    Category         Leakage     Internal    Switching        Total    Row%
-------------------------------------------------------------------------------
    register     3.21000e-05  1.23400e-02  4.00000e-04  1.27721e-02  62.10%
-------------------------------------------------------------------------------
    Subtotal     4.31000e-05  1.44400e-02  5.40000e-03  1.98831e-02 100.00%
";

pub fn write(path: &Path, contents: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

pub fn write_area(root: &Path, tag: ConfigTag, contents: &str) {
    write(&ResultsLayout::default().area_report_path(root, &tag), contents);
}

pub fn write_power(root: &Path, tag: ConfigTag, contents: &str) {
    write(&ResultsLayout::default().power_report_path(root, &tag), contents);
}

/// Three configurations; BITS4_SIZE8 has an area report but a power report with no
/// Subtotal row.
pub fn populate(root: &Path) {
    write_area(root, ConfigTag::new(8, 4), "async_fifo 298 1201.5 140.25 1341.75\n");
    write_area(root, ConfigTag::new(4, 8), "  async_fifo  fifo  342  1390.1234  160  1550.1234\n");
    write_area(root, ConfigTag::new(4, 4), AREA_REPORT_BITS4_SIZE4);

    write_power(root, ConfigTag::new(8, 4), "Subtotal 0.0012345 0.02 0.01 0.0312345 100.00%\n");
    write_power(root, ConfigTag::new(4, 8), "power evaluation aborted\n");
    write_power(root, ConfigTag::new(4, 4), POWER_REPORT_BITS4_SIZE4);
}
