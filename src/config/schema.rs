//! Configuration schema definitions for rigcheck.
//!
//! These structs map to the YAML configuration file format. Every field
//! has a default, so partial files (and layered overrides) deserialize.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::benchmark::MatchMode;
use crate::requirements::IdentityColumns;
use crate::sheets::google::DEFAULT_BASE_URL;
use crate::sheets::MajorDimension;

/// Root configuration structure for rigcheck.yml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigcheckConfig {
    /// Google spreadsheet holding all tables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spreadsheet_id: Option<String>,

    /// Local JSON workbook used instead of the spreadsheet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workbook: Option<PathBuf>,

    /// Where each table lives
    pub tables: Tables,

    /// Identity sheet column layout
    pub identity_columns: IdentityColumns,

    /// How benchmark entries are matched against the CPU name
    pub benchmark_match: MatchMode,

    /// Where the verdict and report are written
    pub cells: Cells,

    /// Spreadsheet API settings
    pub sheets: SheetsSettings,
}

/// Range and orientation of one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRange {
    pub range: String,
    #[serde(default)]
    pub orientation: MajorDimension,
}

impl TableRange {
    fn new(range: &str, orientation: MajorDimension) -> Self {
        Self {
            range: range.to_string(),
            orientation,
        }
    }
}

/// The three tables read each run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tables {
    pub benchmarks: TableRange,
    pub identities: TableRange,
    pub requirements: TableRange,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            benchmarks: TableRange::new("CPU Scores!A2:B", MajorDimension::Rows),
            identities: TableRange::new("ICs!A3:F", MajorDimension::Rows),
            requirements: TableRange::new("Specs!B1:Z7", MajorDimension::Columns),
        }
    }
}

/// Column prefixes of the written cells; the sheet row number is appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cells {
    pub verdict: String,
    pub report: String,
}

impl Default for Cells {
    fn default() -> Self {
        Self {
            verdict: "ICs!G".to_string(),
            report: "ICs!H".to_string(),
        }
    }
}

impl Cells {
    pub fn verdict_at(&self, row: usize) -> String {
        format!("{}{}", self.verdict, row)
    }

    pub fn report_at(&self, row: usize) -> String {
        format!("{}{}", self.report, row)
    }
}

/// Google Sheets API settings.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetsSettings {
    /// Values API endpoint
    pub base_url: String,

    /// Environment variable holding an OAuth access token
    pub token_env: String,

    /// Access token given directly (takes precedence over `token_env`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SheetsSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token_env: "RIGCHECK_SHEETS_TOKEN".to_string(),
            access_token: None,
            timeout_secs: 30,
        }
    }
}

// The access token never appears in debug output or logs.
impl fmt::Debug for SheetsSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetsSettings")
            .field("base_url", &self.base_url)
            .field("token_env", &self.token_env)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl SheetsSettings {
    /// Resolve the access token from config or the environment.
    pub fn resolve_token(&self) -> Option<String> {
        self.resolve_token_with(|key| std::env::var(key).ok())
    }

    /// Resolve with a custom env lookup (for testing).
    pub fn resolve_token_with<F>(&self, env_fn: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.access_token
            .clone()
            .filter(|t| !t.is_empty())
            .or_else(|| env_fn(&self.token_env).filter(|t| !t.is_empty()))
    }
}
