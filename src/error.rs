//! Error types for rigcheck operations.
//!
//! This module defines [`RigcheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `RigcheckError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `RigcheckError::Other`) for unexpected errors
//! - Every failure is fatal to the run; nothing is retried or written after one
//! - All errors should read as operator-facing messages

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for rigcheck operations.
#[derive(Debug, Error)]
pub enum RigcheckError {
    /// Host operating system is not Windows, macOS or Linux.
    #[error("Incompatible operating system '{os}'. Please use Windows, MacOS or Linux")]
    UnsupportedPlatform { os: String },

    /// The normalized CPU model has no entry in the benchmark table.
    #[error("CPU '{cpu}' is not in the CPU benchmark list (looked up as '{normalized}')")]
    UnknownCpuBenchmark { cpu: String, normalized: String },

    /// The identity key selects no requirement row.
    #[error("Identity '{identity}' was not found in the membership list")]
    IdentityNotFound { identity: String },

    /// A table cell could not be converted to the type the comparison needs.
    #[error("Malformed cell in {table} table at line {line}, column {column}: expected {expected}, found '{value}'")]
    MalformedCell {
        table: &'static str,
        line: usize,
        column: usize,
        value: String,
        expected: &'static str,
    },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Reading from or writing to the spreadsheet failed.
    #[error("Spreadsheet {operation} failed: {message}")]
    Sheet { operation: String, message: String },

    /// The operator prompt could not be shown or answered.
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RigcheckError {
    /// Wrap a transport failure for the given spreadsheet operation.
    pub fn sheet(operation: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Sheet {
            operation: operation.into(),
            message: err.to_string(),
        }
    }
}

/// Result type alias for rigcheck operations.
pub type Result<T> = std::result::Result<T, RigcheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_platform_displays_os() {
        let err = RigcheckError::UnsupportedPlatform {
            os: "freebsd".into(),
        };
        assert!(err.to_string().contains("freebsd"));
    }

    #[test]
    fn unknown_cpu_displays_raw_cpu_verbatim() {
        let err = RigcheckError::UnknownCpuBenchmark {
            cpu: "Intel(R) Core(TM) i7-8650U CPU @ 1.90GHz".into(),
            normalized: "i7-8650U".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Intel(R) Core(TM) i7-8650U CPU @ 1.90GHz"));
        assert!(msg.contains("benchmark list"));
    }

    #[test]
    fn identity_not_found_displays_identity() {
        let err = RigcheckError::IdentityNotFound {
            identity: "someone@example.com".into(),
        };
        assert!(err.to_string().contains("someone@example.com"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn malformed_cell_displays_location_and_value() {
        let err = RigcheckError::MalformedCell {
            table: "requirements",
            line: 2,
            column: 3,
            value: "eight".into(),
            expected: "a number",
        };
        let msg = err.to_string();
        assert!(msg.contains("requirements"));
        assert!(msg.contains("line 2"));
        assert!(msg.contains("column 3"));
        assert!(msg.contains("'eight'"));
    }

    #[test]
    fn config_not_found_displays_path() {
        let err = RigcheckError::ConfigNotFound {
            path: PathBuf::from("/foo/rigcheck.yml"),
        };
        assert!(err.to_string().contains("/foo/rigcheck.yml"));
    }

    #[test]
    fn sheet_helper_keeps_operation_and_message() {
        let err = RigcheckError::sheet("read", "HTTP 403 Forbidden");
        let msg = err.to_string();
        assert!(msg.contains("read"));
        assert!(msg.contains("HTTP 403"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: RigcheckError = io_err.into();
        assert!(matches!(err, RigcheckError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(RigcheckError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
