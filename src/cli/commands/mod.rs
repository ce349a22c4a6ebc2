//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`]. With no subcommand, `check` runs.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod report;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
