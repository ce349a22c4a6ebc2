//! Benchmark score table.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RigcheckError};

use super::normalize::normalize;

/// One row of the benchmark sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkEntry {
    pub cpu_key_fragment: String,
    pub score: i64,
}

/// Which side of the comparison must contain the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// The entry's fragment is a substring of the normalized CPU name.
    #[default]
    FragmentInModel,
    /// The normalized CPU name is a substring of the entry's text.
    ModelInEntry,
}

impl MatchMode {
    fn matches(&self, entry: &BenchmarkEntry, normalized: &str) -> bool {
        match self {
            MatchMode::FragmentInModel => normalized.contains(&entry.cpu_key_fragment),
            MatchMode::ModelInEntry => entry.cpu_key_fragment.contains(normalized),
        }
    }
}

/// Benchmark entries in sheet order.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkTable {
    entries: Vec<BenchmarkEntry>,
    mode: MatchMode,
}

impl BenchmarkTable {
    pub fn new(entries: Vec<BenchmarkEntry>, mode: MatchMode) -> Self {
        Self { entries, mode }
    }

    /// Parse sheet rows of `[fragment, score]`.
    ///
    /// Blank rows and rows with an empty fragment are skipped. A missing or
    /// non-integer score fails the whole table.
    pub fn from_rows(rows: &[Vec<String>], mode: MatchMode) -> Result<Self> {
        let mut entries = Vec::with_capacity(rows.len());

        for (line, row) in rows.iter().enumerate() {
            let fragment = row.first().map(|c| c.trim()).unwrap_or_default();
            if fragment.is_empty() {
                if row.iter().any(|c| !c.trim().is_empty()) {
                    tracing::warn!(line, "Skipping benchmark row without a CPU name");
                }
                continue;
            }

            let raw_score = row.get(1).map(String::as_str).unwrap_or_default();
            let score = parse_score(raw_score).ok_or_else(|| RigcheckError::MalformedCell {
                table: "benchmark",
                line,
                column: 1,
                value: raw_score.to_string(),
                expected: "an integer score",
            })?;

            entries.push(BenchmarkEntry {
                cpu_key_fragment: fragment.to_string(),
                score,
            });
        }

        tracing::debug!(entries = entries.len(), ?mode, "Loaded benchmark table");
        Ok(Self { entries, mode })
    }

    pub fn entries(&self) -> &[BenchmarkEntry] {
        &self.entries
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry, in table order, matching an already-normalized name.
    pub fn find(&self, normalized: &str) -> Option<&BenchmarkEntry> {
        if normalized.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|entry| self.mode.matches(entry, normalized))
    }

    /// Normalize a raw CPU brand string and resolve its score.
    pub fn score_for(&self, raw_cpu: &str) -> Result<i64> {
        let normalized = normalize(raw_cpu);
        tracing::debug!(raw = raw_cpu, normalized = %normalized, "Looking up CPU benchmark");

        self.find(&normalized)
            .map(|entry| entry.score)
            .ok_or_else(|| RigcheckError::UnknownCpuBenchmark {
                cpu: raw_cpu.to_string(),
                normalized,
            })
    }
}

/// Parse an integer cell, accepting whole-valued decimals such as `6300.0`.
pub(crate) fn parse_score(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<i64>() {
        return Some(value);
    }
    let value = raw.parse::<f64>().ok()?;
    (value.is_finite() && value.fract() == 0.0).then_some(value as i64)
}
