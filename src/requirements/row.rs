//! Per-project requirement rows.

use crate::benchmark::table::parse_score;
use crate::error::{Result, RigcheckError};

/// Separator between OS variants in the required-OS cell.
pub const OS_SEPARATOR: char = '&';

/// One project's minimum thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct RequirementRow {
    pub project_name: String,
    /// OS variants joined by `&`, e.g. `Windows10&MacOS11&Ubuntu20`.
    pub required_os: String,
    pub min_cpu_score: i64,
    pub min_memory_gb: f64,
    pub min_storage_gb: i64,
    pub min_free_storage_gb: i64,
    pub required_architecture: String,
}

impl RequirementRow {
    /// The OS variants in sheet order.
    pub fn os_variants(&self) -> impl Iterator<Item = &str> {
        self.required_os.split(OS_SEPARATOR)
    }

    /// Parse `[project, os, cpu, memory, storage, free, arch]`.
    fn from_line(line: usize, cells: &[String]) -> Result<Self> {
        let text = |idx: usize| cells.get(idx).map(|c| c.trim().to_string()).unwrap_or_default();

        let integer = |idx: usize| -> Result<i64> {
            let raw = text(idx);
            parse_score(&raw).ok_or(RigcheckError::MalformedCell {
                table: "requirements",
                line,
                column: idx,
                value: raw,
                expected: "an integer",
            })
        };

        // NaN and infinities parse as f64 but cannot serve as a minimum.
        let raw_memory = text(3);
        let min_memory_gb = raw_memory
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| RigcheckError::MalformedCell {
                table: "requirements",
                line,
                column: 3,
                value: raw_memory.clone(),
                expected: "a number",
            })?;

        Ok(Self {
            project_name: text(0),
            required_os: text(1),
            min_cpu_score: integer(2)?,
            min_memory_gb,
            min_storage_gb: integer(4)?,
            min_free_storage_gb: integer(5)?,
            required_architecture: text(6),
        })
    }
}

/// All requirement rows, one per project.
#[derive(Debug, Clone, Default)]
pub struct RequirementTable {
    rows: Vec<RequirementRow>,
}

impl RequirementTable {
    pub fn new(rows: Vec<RequirementRow>) -> Self {
        Self { rows }
    }

    /// Parse fetched lines (one per project, whatever the sheet orientation).
    pub fn from_lines(lines: &[Vec<String>]) -> Result<Self> {
        let mut rows = Vec::with_capacity(lines.len());
        for (line, cells) in lines.iter().enumerate() {
            if cells.iter().all(|c| c.trim().is_empty()) {
                continue;
            }
            rows.push(RequirementRow::from_line(line, cells)?);
        }
        tracing::debug!(projects = rows.len(), "Loaded requirement table");
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[RequirementRow] {
        &self.rows
    }

    /// Rows whose project is one of `projects`, in table order.
    pub fn for_projects<'a, I>(&self, projects: I) -> Vec<RequirementRow>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let wanted: Vec<&str> = projects.into_iter().filter(|p| !p.is_empty()).collect();
        self.rows
            .iter()
            .filter(|row| wanted.contains(&row.project_name.as_str()))
            .cloned()
            .collect()
    }
}
