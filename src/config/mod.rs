//! Configuration loading, parsing, and validation for rigcheck.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use rigcheck::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("rigcheck.yml"), "spreadsheet_id: abc123").unwrap();
//!
//! let config = load_config(temp.path(), Some(&temp.path().join("rigcheck.yml"))).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.spreadsheet_id.as_deref(), Some("abc123"));
//! ```
//!
//! # Configuration File Locations
//!
//! rigcheck discovers and merges configuration in this order:
//! 1. User global config (`~/.rigcheck/config.yml`)
//! 2. Project config (`rigcheck.yml`)
//! 3. Local overrides (`rigcheck.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{
    load_config, load_config_file, load_config_value, load_merged, parse_config, ConfigPaths,
    LOCAL_CONFIG, PROJECT_CONFIG,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{Cells, RigcheckConfig, SheetsSettings, TableRange, Tables};
pub use validator::{validate, validate_config, ValidationError};
