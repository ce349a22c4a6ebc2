//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::config::{load_config, validate, RigcheckConfig};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    root: PathBuf,
}

impl CommandDispatcher {
    /// Create a dispatcher that discovers config files under `root`.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Load, override and validate the configuration for `cli`.
    pub fn load_config(&self, cli: &Cli) -> Result<RigcheckConfig> {
        let mut config = load_config(&self.root, cli.config.as_deref())?;
        if let Some(workbook) = &cli.workbook {
            config.workbook = Some(workbook.clone());
        }
        validate(&config)?;

        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(self.load_config(cli)?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Report(args)) => {
                let cmd = super::report::ReportCommand::new(self.load_config(cli)?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd =
                    super::check::CheckCommand::new(self.load_config(cli)?, CheckArgs::default());
                cmd.execute(ui)
            }
        }
    }
}
