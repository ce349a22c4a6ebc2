//! Check command implementation.
//!
//! The `rigcheck check` command collects this machine's properties, asks
//! for the operator's identity, validates against the identity's project
//! requirements and records the verdict and report in the spreadsheet.

use crate::cli::args::CheckArgs;
use crate::config::RigcheckConfig;
use crate::error::{Result, RigcheckError};
use crate::runner::{open_store, write_access_warning, CheckOutcome, CheckRun};
use crate::sheets::SheetStore;
use crate::system::{HostProbe, SysinfoProbe};
use crate::ui::{Prompt, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Question asked when no identity is given on the command line.
pub const IDENTITY_QUESTION: &str = "Please enter your email address";

/// Printed once both cells are written.
pub const SUCCESS_MESSAGE: &str = "Machine configuration details updated in the spreadsheet";

/// The check command implementation.
pub struct CheckCommand {
    config: RigcheckConfig,
    args: CheckArgs,
}

impl CheckCommand {
    pub fn new(config: RigcheckConfig, args: CheckArgs) -> Self {
        Self { config, args }
    }

    /// Run against an explicit store and probe.
    pub fn run_with(
        &self,
        ui: &mut dyn UserInterface,
        store: &mut dyn SheetStore,
        probe: &dyn HostProbe,
    ) -> Result<CommandResult> {
        let run = CheckRun::new(&self.config, probe);

        if !self.args.dry_run {
            if let Some(warning) = write_access_warning(&self.config) {
                ui.warning(&warning);
            }
        }

        let mut spinner = ui.start_spinner("Collecting machine details...");
        let properties = match run.collect(store) {
            Ok(properties) => {
                spinner.finish_success("Collected machine details");
                properties
            }
            Err(e) => {
                spinner.finish_error("Could not collect machine details");
                return Err(e);
            }
        };

        let identity = self.identity(ui)?;

        let mut spinner = ui.start_spinner("Fetching project requirements...");
        let mut outcome = match run.evaluate(store, properties, &identity) {
            Ok(outcome) => {
                spinner.finish_success("Fetched project requirements");
                outcome
            }
            Err(e @ RigcheckError::IdentityNotFound { .. }) => {
                spinner.finish_error("Identity not found");
                return self.identity_not_found(ui, &e);
            }
            Err(e) => {
                spinner.finish_error("Could not evaluate requirements");
                return Err(e);
            }
        };

        if self.args.dry_run {
            show_dry_run(ui, &outcome);
            return Ok(CommandResult::success());
        }

        run.record(store, &mut outcome)?;
        if ui.output_mode().shows_details() {
            show_outcome(ui, &outcome);
        }
        ui.success(SUCCESS_MESSAGE);

        Ok(CommandResult::success())
    }

    fn identity(&self, ui: &mut dyn UserInterface) -> Result<String> {
        match &self.args.identity {
            Some(identity) => Ok(identity.clone()),
            None => Ok(ui
                .prompt(&Prompt::input("identity", IDENTITY_QUESTION))?
                .as_string()),
        }
    }

    fn identity_not_found(
        &self,
        ui: &mut dyn UserInterface,
        err: &RigcheckError,
    ) -> Result<CommandResult> {
        ui.error(&format!("Error: {}", err));
        if ui.is_interactive() {
            // The answer does not matter; the run ends either way.
            ui.prompt(&Prompt::confirm("acknowledge", "Press enter to exit", true))?;
        }
        Ok(CommandResult::failure(1))
    }
}

fn show_outcome(ui: &mut dyn UserInterface, outcome: &CheckOutcome) {
    ui.message(&format!(
        "Requirements met: {} (row {})",
        outcome.verdict.as_cell(),
        outcome.sheet_row
    ));
    ui.message(&outcome.report);
}

fn show_dry_run(ui: &mut dyn UserInterface, outcome: &CheckOutcome) {
    ui.show_header("Dry run");
    ui.message(&format!("Requirements met: {}", outcome.verdict.as_cell()));
    ui.message(&format!(
        "Would write {} to {} and the report to {}",
        outcome.verdict.as_cell(),
        outcome.verdict_cell,
        outcome.report_cell
    ));
    ui.message(&outcome.report);
    ui.success("Dry run complete, nothing was written");
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = open_store(&self.config)?;

        let mut spinner = ui.start_spinner("Probing hardware...");
        let probe = SysinfoProbe::new();
        spinner.finish_success("Probed hardware");

        self.run_with(ui, store.as_mut(), &probe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::MemoryStore;
    use crate::system::collector::tests::FakeProbe;
    use crate::ui::{MockUI, OutputMode, SpinnerStatus};

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn config() -> RigcheckConfig {
        let mut config = RigcheckConfig {
            spreadsheet_id: Some("test".to_string()),
            ..RigcheckConfig::default()
        };
        config.sheets.token_env = "RIGCHECK_TEST_TOKEN_UNSET".to_string();
        config
    }

    fn store() -> MemoryStore {
        MemoryStore::new()
            .with_range("CPU Scores!A2:B", vec![cells(&["i7-8650U", "6300"])])
            .with_range(
                "ICs!A3:F",
                vec![
                    cells(&["Ada", "ada@example.com", "Alpha", "", "", ""]),
                    cells(&["Bo", "bo@example.com", "Alpha", "", "", ""]),
                ],
            )
            .with_range(
                "Specs!B1:Z7",
                vec![
                    cells(&["Alpha"]),
                    cells(&["Windows10"]),
                    cells(&["6000"]),
                    cells(&["8"]),
                    cells(&["256"]),
                    cells(&["50"]),
                    cells(&["64"]),
                ],
            )
    }

    fn command(identity: Option<&str>, dry_run: bool) -> CheckCommand {
        CheckCommand::new(
            config(),
            CheckArgs {
                identity: identity.map(String::from),
                dry_run,
            },
        )
    }

    #[test]
    fn prompts_for_identity_and_records() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("identity", "bo@example.com");
        let mut store = store();

        let result = command(None, false)
            .run_with(&mut ui, &mut store, &FakeProbe::default())
            .unwrap();

        assert!(result.success);
        assert_eq!(ui.prompts_shown(), ["identity"]);
        assert_eq!(store.cell("ICs!G4"), Some("Yes"));
        assert!(store.cell("ICs!H4").is_some());
        assert!(ui.has_success(SUCCESS_MESSAGE));
    }

    #[test]
    fn identity_flag_skips_prompt() {
        let mut ui = MockUI::new();
        let mut store = store();

        command(Some("ada@example.com"), false)
            .run_with(&mut ui, &mut store, &FakeProbe::default())
            .unwrap();

        assert!(ui.prompts_shown().is_empty());
        assert_eq!(store.cell("ICs!G3"), Some("Yes"));
    }

    #[test]
    fn unknown_identity_fails_and_asks_for_acknowledgement() {
        let mut ui = MockUI::new();
        ui.set_interactive(true);
        let mut store = store();

        let result = command(Some("nobody@example.com"), false)
            .run_with(&mut ui, &mut store, &FakeProbe::default())
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("nobody@example.com"));
        assert_eq!(ui.prompts_shown(), ["acknowledge"]);
        assert!(store.writes().is_empty());
    }

    #[test]
    fn unknown_identity_without_tty_does_not_prompt() {
        let mut ui = MockUI::new();
        let mut store = store();

        let result = command(Some("nobody@example.com"), false)
            .run_with(&mut ui, &mut store, &FakeProbe::default())
            .unwrap();

        assert!(!result.success);
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn empty_prompt_answer_is_identity_not_found() {
        let mut ui = MockUI::new();
        let mut store = store();

        let result = command(None, false)
            .run_with(&mut ui, &mut store, &FakeProbe::default())
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("not found"));
    }

    #[test]
    fn dry_run_shows_target_cells() {
        let mut ui = MockUI::new();
        let mut store = store();

        let result = command(Some("ada@example.com"), true)
            .run_with(&mut ui, &mut store, &FakeProbe::default())
            .unwrap();

        assert!(result.success);
        assert!(store.writes().is_empty());
        assert!(ui.has_message("Would write Yes to ICs!G3 and the report to ICs!H3"));
        assert!(ui.has_message(" - CPU Score : 6300"));
        assert!(!ui.has_success(SUCCESS_MESSAGE));
        assert_eq!(ui.headers(), ["Dry run"]);
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn missing_token_warns_before_the_run() {
        let mut ui = MockUI::new();
        let mut store = store();

        command(Some("ada@example.com"), false)
            .run_with(&mut ui, &mut store, &FakeProbe::default())
            .unwrap();

        assert!(ui.has_warning("RIGCHECK_TEST_TOKEN_UNSET"));
        assert_eq!(ui.spinners()[0], "Collecting machine details...");
    }

    #[test]
    fn configured_token_silences_the_warning() {
        let mut config = config();
        config.sheets.access_token = Some("token".to_string());
        let cmd = CheckCommand::new(
            config,
            CheckArgs {
                identity: Some("ada@example.com".to_string()),
                dry_run: false,
            },
        );
        let mut ui = MockUI::new();

        cmd.run_with(&mut ui, &mut store(), &FakeProbe::default())
            .unwrap();

        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn unknown_cpu_is_an_error() {
        let mut ui = MockUI::new();
        let mut store = store();
        let probe = FakeProbe {
            cpu: "Apple M2".to_string(),
            ..FakeProbe::default()
        };

        let err = command(Some("ada@example.com"), false)
            .run_with(&mut ui, &mut store, &probe)
            .unwrap_err();

        assert!(matches!(err, RigcheckError::UnknownCpuBenchmark { .. }));
        assert_eq!(ui.spinner_results()[0].0, SpinnerStatus::Error);
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn verbose_mode_shows_the_report() {
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        let mut store = store();

        command(Some("ada@example.com"), false)
            .run_with(&mut ui, &mut store, &FakeProbe::default())
            .unwrap();

        assert!(ui.has_message("Requirements met: Yes (row 3)"));
        assert!(ui.has_message(" - Architecture : X64"));
    }
}
