//! Check orchestration.
//!
//! [`CheckRun`] drives one run strictly in sequence: collect host facts,
//! fetch the tables, resolve the identity, validate, format the report and
//! write both cells. Any failure ends the run before anything is written.

pub mod check;

pub use check::{
    load_benchmarks, load_identities, load_requirements, CheckOptions, CheckOutcome, CheckRun,
};

use std::time::Duration;

use crate::config::RigcheckConfig;
use crate::error::{Result, RigcheckError};
use crate::sheets::{GoogleSheetsStore, SheetStore, WorkbookStore};

/// Open the store the configuration points at.
///
/// A configured workbook takes precedence over the spreadsheet.
pub fn open_store(config: &RigcheckConfig) -> Result<Box<dyn SheetStore>> {
    if let Some(path) = &config.workbook {
        tracing::debug!(path = %path.display(), "Using local workbook");
        return Ok(Box::new(WorkbookStore::open(path)?));
    }

    let spreadsheet_id = config
        .spreadsheet_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| RigcheckError::ConfigValidationError {
            message: "Either 'spreadsheet_id' or 'workbook' must be set".to_string(),
        })?;

    let settings = &config.sheets;
    let token = settings.resolve_token();

    tracing::debug!(spreadsheet_id, has_token = token.is_some(), "Using Google Sheets");
    Ok(Box::new(GoogleSheetsStore::with_options(
        settings.base_url.as_str(),
        spreadsheet_id,
        token,
        Duration::from_secs(settings.timeout_secs),
    )?))
}

/// Operator warning when results cannot be written back to the spreadsheet.
///
/// Workbook runs never need a token.
pub fn write_access_warning(config: &RigcheckConfig) -> Option<String> {
    if config.workbook.is_some() || config.sheets.resolve_token().is_some() {
        return None;
    }
    Some(format!(
        "No spreadsheet access token found; set {} or sheets.access_token, otherwise the result cannot be written",
        config.sheets.token_env
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::MajorDimension;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn workbook_wins_over_spreadsheet() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("book.json");
        fs::write(&path, r#"{"ranges": {"A!A1:B": [["x", "1"]]}}"#).unwrap();

        let config = RigcheckConfig {
            spreadsheet_id: Some("ignored".to_string()),
            workbook: Some(path),
            ..RigcheckConfig::default()
        };

        let store = open_store(&config).unwrap();
        let rows = store.fetch_rows("A!A1:B", MajorDimension::Rows).unwrap();
        assert_eq!(rows, vec![vec!["x", "1"]]);
    }

    #[test]
    fn spreadsheet_store_is_built_without_network() {
        let config = RigcheckConfig {
            spreadsheet_id: Some("abc".to_string()),
            ..RigcheckConfig::default()
        };
        assert!(open_store(&config).is_ok());
    }

    #[test]
    fn missing_token_warns_only_for_spreadsheets() {
        let mut config = RigcheckConfig {
            spreadsheet_id: Some("abc".to_string()),
            ..RigcheckConfig::default()
        };
        config.sheets.token_env = "RIGCHECK_TOKEN_NEVER_SET".to_string();

        let warning = write_access_warning(&config).unwrap();
        assert!(warning.contains("RIGCHECK_TOKEN_NEVER_SET"));

        config.sheets.access_token = Some("token".to_string());
        assert_eq!(write_access_warning(&config), None);

        config.sheets.access_token = None;
        config.workbook = Some("book.json".into());
        assert_eq!(write_access_warning(&config), None);
    }

    #[test]
    fn no_source_is_a_config_error() {
        let err = open_store(&RigcheckConfig::default()).err().unwrap();
        assert!(matches!(err, RigcheckError::ConfigValidationError { .. }));
    }
}
