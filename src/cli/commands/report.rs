//! Report command implementation.
//!
//! The `rigcheck report` command collects this machine's properties and
//! prints them without touching the identity or requirement tables.

use crate::cli::args::ReportArgs;
use crate::config::RigcheckConfig;
use crate::error::{Result, RigcheckError};
use crate::report::format_report;
use crate::runner::{open_store, CheckRun};
use crate::sheets::SheetStore;
use crate::system::{HostProbe, SysinfoProbe, SystemProperties};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The report command implementation.
pub struct ReportCommand {
    config: RigcheckConfig,
    args: ReportArgs,
}

impl ReportCommand {
    pub fn new(config: RigcheckConfig, args: ReportArgs) -> Self {
        Self { config, args }
    }

    /// Collect and render the properties.
    pub fn render(&self, store: &dyn SheetStore, probe: &dyn HostProbe) -> Result<String> {
        let properties = CheckRun::new(&self.config, probe).collect(store)?;
        self.format(&properties)
    }

    fn format(&self, properties: &SystemProperties) -> Result<String> {
        if self.args.json {
            serde_json::to_string_pretty(properties)
                .map_err(|e| RigcheckError::Other(anyhow::Error::new(e)))
        } else {
            Ok(format_report(properties))
        }
    }
}

impl Command for ReportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = open_store(&self.config)?;

        let mut spinner = ui.start_spinner("Collecting machine details...");
        let probe = SysinfoProbe::new();
        let rendered = match self.render(store.as_ref(), &probe) {
            Ok(rendered) => {
                spinner.finish_success("Collected machine details");
                rendered
            }
            Err(e) => {
                spinner.finish_error("Could not collect machine details");
                return Err(e);
            }
        };

        println!("{}", rendered);
        Ok(CommandResult::success())
    }
}
