//! Requirement resolution and validation.
//!
//! This module decides which project requirements apply to an identity and
//! whether the current machine meets all of them.
//!
//! # Modules
//!
//! - [`identity`] - Identity records and the membership table
//! - [`row`] - Per-project requirement rows
//! - [`resolver`] - Identity → requirement rows, plus the sheet row offset
//! - [`validator`] - Field-by-field comparison and the overall verdict

pub mod identity;
pub mod resolver;
pub mod row;
pub mod validator;

pub use identity::{IdentityColumns, IdentityRecord, IdentityTable};
pub use resolver::{sheet_row, RequirementResolver, HEADER_ROW_OFFSET, ONE_BASED_INDEXING};
pub use row::{RequirementRow, RequirementTable, OS_SEPARATOR};
pub use validator::{
    current_os_version, expected_os_version, row_satisfied, validate, ValidationVerdict,
};
