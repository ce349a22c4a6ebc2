//! Command-line interface for rigcheck.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, ReportArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
