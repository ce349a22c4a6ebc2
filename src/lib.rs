//! rigcheck - Verify a trainee's machine against program requirements.
//!
//! rigcheck collects this machine's properties, looks up which projects an
//! identity belongs to, compares the machine against each project's minimum
//! requirements and records the verdict and a summary in a shared
//! spreadsheet.
//!
//! # Modules
//!
//! - [`benchmark`] - CPU name normalization and benchmark score lookup
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and validation
//! - [`error`] - Error types and result aliases
//! - [`report`] - The fixed-format property summary
//! - [`requirements`] - Identity resolution and requirement validation
//! - [`runner`] - The collect, resolve, validate, write sequence
//! - [`sheets`] - Spreadsheet stores (Google Sheets, JSON workbook, memory)
//! - [`system`] - Host property collection
//! - [`ui`] - Prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use rigcheck::benchmark::{normalize, BenchmarkTable, MatchMode};
//!
//! let rows = vec![vec!["i7-8650U".to_string(), "6300".to_string()]];
//! let table = BenchmarkTable::from_rows(&rows, MatchMode::default()).unwrap();
//!
//! assert_eq!(normalize("Intel(R) Core(TM) i7-8650U CPU @ 1.90GHz"), "i7-8650U");
//! assert_eq!(table.score_for("Intel(R) Core(TM) i7-8650U CPU @ 1.90GHz").unwrap(), 6300);
//! ```

pub mod benchmark;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod requirements;
pub mod runner;
pub mod sheets;
pub mod system;
pub mod ui;

pub use error::{Result, RigcheckError};
