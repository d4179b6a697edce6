//! Record schema for the area and power tables.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Column names of `area_table.csv`, in emission order.
pub const AREA_COLUMNS: &[&str] = &[
    "cfg",
    "bits",
    "size",
    "cell_count",
    "cell_area_um2",
    "net_area_um2",
    "total_area_um2",
];

/// Column names of `power_table.csv`, in emission order.
pub const POWER_COLUMNS: &[&str] = &[
    "cfg",
    "bits",
    "size",
    "leakage_mw",
    "internal_mw",
    "switching_mw",
    "total_mw",
];

/// One synthesis run, identified by its data path width and queue depth.
///
/// Ordering is numeric on `(bits, size)`. The directory label is always recomputed
/// from the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConfigTag {
    pub bits: u32,
    pub size: u32,
}

impl ConfigTag {
    pub fn new(bits: u32, size: u32) -> Self {
        ConfigTag { bits, size }
    }

    /// Canonical directory name, `BITS<bits>_SIZE<size>`.
    pub fn label(&self) -> String {
        format!("BITS{}_SIZE{}", self.bits, self.size)
    }
}

impl fmt::Display for ConfigTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl Serialize for ConfigTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ConfigTag", 3)?;
        s.serialize_field("cfg", &self.label())?;
        s.serialize_field("bits", &self.bits)?;
        s.serialize_field("size", &self.size)?;
        s.end()
    }
}

/// Area row for the top-level `async_fifo` instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaRecord {
    #[serde(flatten)]
    pub tag: ConfigTag,
    pub cell_count: u64,
    pub cell_area_um2: f64,
    pub net_area_um2: f64,
    pub total_area_um2: f64,
}

/// Power `Subtotal` row, in milliwatts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerRecord {
    #[serde(flatten)]
    pub tag: ConfigTag,
    pub leakage_mw: f64,
    pub internal_mw: f64,
    pub switching_mw: f64,
    pub total_mw: f64,
}

/// A single table cell before formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Text(String),
    Int(u64),
    Real(f64),
}

/// A record that can be laid out as one table row.
pub trait TableRecord {
    /// Header row, including the leading `cfg, bits, size` columns.
    const COLUMNS: &'static [&'static str];
    /// Digits after the decimal point for real columns in markdown.
    const MARKDOWN_PRECISION: usize;

    fn tag(&self) -> ConfigTag;

    /// Measurement columns following the tag columns.
    fn values(&self) -> Vec<Field>;

    /// Full row in `COLUMNS` order.
    fn row(&self) -> Vec<Field> {
        let tag = self.tag();
        let mut row = vec![
            Field::Text(tag.label()),
            Field::Int(u64::from(tag.bits)),
            Field::Int(u64::from(tag.size)),
        ];
        row.extend(self.values());
        row
    }
}

impl TableRecord for AreaRecord {
    const COLUMNS: &'static [&'static str] = AREA_COLUMNS;
    const MARKDOWN_PRECISION: usize = 3;

    fn tag(&self) -> ConfigTag {
        self.tag
    }

    fn values(&self) -> Vec<Field> {
        vec![
            Field::Int(self.cell_count),
            Field::Real(self.cell_area_um2),
            Field::Real(self.net_area_um2),
            Field::Real(self.total_area_um2),
        ]
    }
}

impl TableRecord for PowerRecord {
    const COLUMNS: &'static [&'static str] = POWER_COLUMNS;
    // Power values are sub-milliwatt and need finer display precision.
    const MARKDOWN_PRECISION: usize = 6;

    fn tag(&self) -> ConfigTag {
        self.tag
    }

    fn values(&self) -> Vec<Field> {
        vec![
            Field::Real(self.leakage_mw),
            Field::Real(self.internal_mw),
            Field::Real(self.switching_mw),
            Field::Real(self.total_mw),
        ]
    }
}

/// Sort records ascending by `(bits, size)`.
pub fn sort_by_tag<R: TableRecord>(records: &mut [R]) {
    records.sort_by_key(|r| r.tag());
}
