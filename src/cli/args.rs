//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// rigcheck - Verify this machine meets your program's requirements.
#[derive(Debug, Parser)]
#[command(name = "rigcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (replaces rigcheck.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Local JSON workbook to use instead of the spreadsheet
    #[arg(short, long, global = true)]
    pub workbook: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check this machine and record the result (default if no command specified)
    Check(CheckArgs),

    /// Collect and print this machine's properties
    Report(ReportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    /// Identity key (email address); prompted for when omitted
    #[arg(short, long, env = "RIGCHECK_IDENTITY")]
    pub identity: Option<String>,

    /// Evaluate without writing to the spreadsheet
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `report` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ReportArgs {
    /// Print properties as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
