//! In-memory store for tests.
//!
//! # Example
//!
//! ```
//! use rigcheck::sheets::{MajorDimension, MemoryStore, SheetStore};
//!
//! let mut store = MemoryStore::new();
//! store.insert_range("Scores!A2:B", vec![vec!["i7-8650U".into(), "6300".into()]]);
//! store.write_cell("ICs!G5", "Yes").unwrap();
//!
//! assert_eq!(store.fetch_rows("Scores!A2:B", MajorDimension::Rows).unwrap().len(), 1);
//! assert_eq!(store.cell("ICs!G5"), Some("Yes"));
//! ```

use crate::error::Result;

use super::workbook::Workbook;
use super::{MajorDimension, SheetStore};

/// Store holding a [`Workbook`] in memory and recording writes in order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    workbook: Workbook,
    writes: Vec<(String, String)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a row-major range.
    pub fn insert_range(&mut self, range: &str, rows: Vec<Vec<String>>) {
        self.workbook.ranges.insert(range.to_string(), rows);
    }

    /// Builder form of [`insert_range`](Self::insert_range).
    pub fn with_range(mut self, range: &str, rows: Vec<Vec<String>>) -> Self {
        self.insert_range(range, rows);
        self
    }

    /// Last value written to `location`.
    pub fn cell(&self, location: &str) -> Option<&str> {
        self.workbook.cells.get(location).map(String::as_str)
    }

    /// All writes as `(location, value)` in the order they happened.
    pub fn writes(&self) -> &[(String, String)] {
        &self.writes
    }
}

impl SheetStore for MemoryStore {
    fn fetch_rows(&self, range: &str, dimension: MajorDimension) -> Result<Vec<Vec<String>>> {
        self.workbook.range(range, dimension)
    }

    fn write_cell(&mut self, location: &str, value: &str) -> Result<()> {
        self.workbook
            .cells
            .insert(location.to_string(), value.to_string());
        self.writes.push((location.to_string(), value.to_string()));
        Ok(())
    }
}
