//! Identity membership table.
//!
//! Each sheet row names one trainee (by email, usually) and up to four
//! projects they are enrolled in.

use serde::{Deserialize, Serialize};

/// Column layout of the identity sheet, zero-based within the fetched range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityColumns {
    /// Column holding the identity key.
    pub key: usize,
    /// Columns holding project names.
    pub projects: Vec<usize>,
}

impl Default for IdentityColumns {
    fn default() -> Self {
        Self {
            key: 1,
            projects: vec![2, 3, 4, 5],
        }
    }
}

/// One identity and the projects it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityRecord {
    pub identity_key: String,
    /// Deduplicated in first-seen order; blank cells are kept as `""`.
    pub project_memberships: Vec<String>,
}

impl IdentityRecord {
    /// Build a record from a raw sheet row.
    pub fn from_row(row: &[String], columns: &IdentityColumns) -> Self {
        let cell = |idx: usize| row.get(idx).map(|c| c.trim().to_string()).unwrap_or_default();

        let mut project_memberships: Vec<String> = Vec::with_capacity(columns.projects.len());
        for project in columns.projects.iter().map(|&idx| cell(idx)) {
            if !project_memberships.contains(&project) {
                project_memberships.push(project);
            }
        }

        Self {
            identity_key: cell(columns.key),
            project_memberships,
        }
    }

    /// Non-blank project names.
    pub fn projects(&self) -> impl Iterator<Item = &str> {
        self.project_memberships
            .iter()
            .map(String::as_str)
            .filter(|p| !p.is_empty())
    }
}

/// The identity sheet, keeping raw rows so positions match the sheet.
#[derive(Debug, Clone, Default)]
pub struct IdentityTable {
    rows: Vec<Vec<String>>,
    records: Vec<IdentityRecord>,
}

impl IdentityTable {
    /// Parse rows as fetched. Blank rows produce no record but keep their position.
    pub fn from_rows(rows: Vec<Vec<String>>, columns: &IdentityColumns) -> Self {
        let records = rows
            .iter()
            .filter(|row| !row.is_empty())
            .map(|row| IdentityRecord::from_row(row, columns))
            .collect::<Vec<_>>();

        tracing::debug!(rows = rows.len(), records = records.len(), "Loaded identity table");
        Self { rows, records }
    }

    pub fn records(&self) -> &[IdentityRecord] {
        &self.records
    }

    /// First record whose key equals `identity`.
    pub fn record_for(&self, identity: &str) -> Option<&IdentityRecord> {
        self.records.iter().find(|r| r.identity_key == identity)
    }

    /// Zero-based position of the first raw row with any cell equal to `identity`.
    pub fn position_of(&self, identity: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.iter().any(|cell| cell.trim() == identity))
    }
}
