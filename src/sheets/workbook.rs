//! Local JSON workbook store.
//!
//! A workbook file holds the fetched ranges row-major and the cells written
//! back by previous runs:
//!
//! ```json
//! {
//!   "ranges": { "CPU Scores!A2:B": [["i7-8650U", "6300"]] },
//!   "cells": { "ICs!G5": "Yes" }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RigcheckError};

use super::{orient, MajorDimension, SheetStore};

/// In-file representation of a workbook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workbook {
    pub ranges: BTreeMap<String, Vec<Vec<String>>>,
    pub cells: BTreeMap<String, String>,
}

impl Workbook {
    /// Range contents in the requested orientation.
    pub fn range(&self, range: &str, dimension: MajorDimension) -> Result<Vec<Vec<String>>> {
        self.ranges
            .get(range)
            .map(|rows| orient(rows, dimension))
            .ok_or_else(|| RigcheckError::sheet("read", format!("range '{}' not in workbook", range)))
    }
}

/// Store persisted to a JSON file after every write.
#[derive(Debug)]
pub struct WorkbookStore {
    path: PathBuf,
    workbook: Workbook,
}

impl WorkbookStore {
    /// Load a workbook file.
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            RigcheckError::sheet("open", format!("{}: {}", path.display(), e))
        })?;
        let workbook: Workbook = serde_json::from_str(&content).map_err(|e| {
            RigcheckError::sheet("open", format!("{}: {}", path.display(), e))
        })?;

        tracing::debug!(path = %path.display(), ranges = workbook.ranges.len(), "Opened workbook");
        Ok(Self {
            path: path.to_path_buf(),
            workbook,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn workbook(&self) -> &Workbook {
        &self.workbook
    }

    fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.workbook)
            .map_err(|e| RigcheckError::sheet("write", e))?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl SheetStore for WorkbookStore {
    fn fetch_rows(&self, range: &str, dimension: MajorDimension) -> Result<Vec<Vec<String>>> {
        self.workbook.range(range, dimension)
    }

    fn write_cell(&mut self, location: &str, value: &str) -> Result<()> {
        self.workbook
            .cells
            .insert(location.to_string(), value.to_string());
        self.save()
    }
}
