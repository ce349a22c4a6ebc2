//! Spreadsheet access.
//!
//! All tables the checker needs are read through [`SheetStore`], and the
//! verdict and report are written back through it. Three stores exist:
//!
//! - [`GoogleSheetsStore`] - the Google Sheets values API over HTTPS
//! - [`WorkbookStore`] - a local JSON workbook file, for offline use
//! - [`MemoryStore`] - in-memory tables, for tests

pub mod google;
pub mod memory;
pub mod workbook;

pub use google::GoogleSheetsStore;
pub use memory::MemoryStore;
pub use workbook::{Workbook, WorkbookStore};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Whether fetched values are grouped by row or by column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MajorDimension {
    #[default]
    Rows,
    Columns,
}

impl MajorDimension {
    /// Query parameter value used by the values API.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            MajorDimension::Rows => "ROWS",
            MajorDimension::Columns => "COLUMNS",
        }
    }
}

/// Tabular data source and sink.
pub trait SheetStore {
    /// Fetch a range as lines of cell text, grouped by `dimension`.
    fn fetch_rows(&self, range: &str, dimension: MajorDimension) -> Result<Vec<Vec<String>>>;

    /// Write one cell.
    fn write_cell(&mut self, location: &str, value: &str) -> Result<()>;
}

/// Convert row-major lines to column-major, padding short rows with blanks.
pub fn transpose(rows: &[Vec<String>]) -> Vec<Vec<String>> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    (0..width)
        .map(|col| {
            rows.iter()
                .map(|row| row.get(col).cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}

/// Lay out stored row-major data in the requested orientation.
pub(crate) fn orient(rows: &[Vec<String>], dimension: MajorDimension) -> Vec<Vec<String>> {
    match dimension {
        MajorDimension::Rows => rows.to_vec(),
        MajorDimension::Columns => transpose(rows),
    }
}
