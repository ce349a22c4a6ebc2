//! Non-interactive UI for piped and headless runs.

use std::collections::HashMap;
use std::io::BufRead;

use crate::error::{Result, RigcheckError};

use super::{is_affirmative, OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface};

/// Prefix of environment variables that answer prompts by key.
pub const PROMPT_ENV_PREFIX: &str = "RIGCHECK_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `RIGCHECK_PROMPT_<KEY>`, then the prompt
/// default, then (for text input) one line of stdin.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
    input: Option<Box<dyn BufRead>>,
}

impl NonInteractiveUI {
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
            input: None,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
            input: None,
        }
    }

    /// Read text answers from `input` instead of stdin.
    pub fn with_input(mut self, input: impl BufRead + 'static) -> Self {
        self.input = Some(Box::new(input));
        self
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        match self.input.as_mut() {
            Some(input) => input.read_line(&mut line)?,
            None => std::io::stdin().lock().read_line(&mut line)?,
        };
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        let answer = match self.env_overrides.get(&env_key) {
            Some(value) => Some(value.clone()),
            None => prompt.default.clone(),
        };

        match (&prompt.prompt_type, answer) {
            (PromptType::Confirm, Some(answer)) => Ok(PromptResult::Bool(is_affirmative(&answer))),
            (PromptType::Input, Some(answer)) => Ok(PromptResult::String(answer)),
            (PromptType::Input, None) => {
                if self.mode.shows_status() {
                    eprintln!("{}:", prompt.question);
                }
                Ok(PromptResult::String(self.read_line()?))
            }
            (PromptType::Confirm, None) => Err(RigcheckError::Prompt {
                message: format!(
                    "Cannot ask '{}' in non-interactive mode (set {})",
                    prompt.key, env_key
                ),
            }),
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            eprintln!("  {}", message);
        }
        Box::new(NoopSpinner { mode: self.mode })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner stand-in that prints the final line only.
struct NoopSpinner {
    mode: OutputMode,
}

impl SpinnerHandle for NoopSpinner {
    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_spinners() {
            eprintln!("✓ {}", msg);
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }
}
