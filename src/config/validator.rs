//! Configuration validation rules.
//!
//! - A data source must be configured (spreadsheet or workbook)
//! - Table ranges and cell prefixes must be non-empty
//! - The request timeout must be positive
//! - The identity key column cannot double as a project column

use crate::config::schema::{RigcheckConfig, TableRange};
use crate::error::{Result, RigcheckError};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return every problem found.
pub fn validate_config(config: &RigcheckConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_source(config));
    errors.extend(validate_tables(config));
    errors.extend(validate_cells(config));
    errors.extend(validate_identity_columns(config));

    if config.sheets.timeout_secs == 0 {
        errors.push(ValidationError::new(
            "zero-timeout",
            "sheets.timeout_secs must be greater than zero",
        ));
    }

    errors
}

fn validate_source(config: &RigcheckConfig) -> Vec<ValidationError> {
    let has_sheet = config
        .spreadsheet_id
        .as_deref()
        .is_some_and(|id| !id.trim().is_empty());

    if has_sheet || config.workbook.is_some() {
        Vec::new()
    } else {
        vec![ValidationError::new(
            "no-data-source",
            "Either 'spreadsheet_id' or 'workbook' must be set",
        )]
    }
}

fn validate_tables(config: &RigcheckConfig) -> Vec<ValidationError> {
    let tables: [(&str, &TableRange); 3] = [
        ("benchmarks", &config.tables.benchmarks),
        ("identities", &config.tables.identities),
        ("requirements", &config.tables.requirements),
    ];

    tables
        .into_iter()
        .filter(|(_, table)| table.range.trim().is_empty())
        .map(|(name, _)| {
            ValidationError::new(
                "empty-range",
                format!("tables.{}.range must not be empty", name),
            )
        })
        .collect()
}

fn validate_cells(config: &RigcheckConfig) -> Vec<ValidationError> {
    [("verdict", &config.cells.verdict), ("report", &config.cells.report)]
        .into_iter()
        .filter(|(_, prefix)| prefix.trim().is_empty())
        .map(|(name, _)| {
            ValidationError::new(
                "empty-cell-prefix",
                format!("cells.{} must not be empty", name),
            )
        })
        .collect()
}

fn validate_identity_columns(config: &RigcheckConfig) -> Vec<ValidationError> {
    let columns = &config.identity_columns;
    if columns.projects.contains(&columns.key) {
        vec![ValidationError::new(
            "key-is-project-column",
            format!(
                "identity_columns.key ({}) is also listed in identity_columns.projects",
                columns.key
            ),
        )]
    } else {
        Vec::new()
    }
}

/// Validate and return an error listing every problem.
pub fn validate(config: &RigcheckConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(RigcheckError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
