//! Shell context construction, dispatch and error reporting.

use strsim::levenshtein;
use thiserror::Error;
use tracing::debug;

use crate::config::{Config, ConfigManager};
use crate::core::{Command, CommandOutcome, ExpenseSession};
use crate::errors::LedgerError;

use super::commands;
use super::output::{self, OutputPreferences};
use super::registry::{CommandEntry, CommandRegistry};
use super::surface::TerminalSurface;
pub use crate::cli::shell_context::{CliMode, ShellContext};
pub use crate::errors::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config = ConfigManager::new().load()?;
        Ok(Self::with_config(mode, config))
    }

    pub fn with_config(mode: CliMode, config: Config) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        apply_output_preferences(mode, &config);
        let session = ExpenseSession::new(config.display_format());

        ShellContext {
            mode,
            registry,
            session,
            surface: TerminalSurface::new(mode),
            config,
            running: true,
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    /// Runs a session command against the terminal surface.
    pub(crate) fn apply(&mut self, command: Command) -> Result<CommandOutcome, CommandError> {
        debug!(?command, "dispatching session command");
        let outcome = self.session.dispatch(command, &mut self.surface);
        self.surface.reset_answers();
        outcome.map_err(CommandError::from)
    }

    /// Re-applies display settings after `config` changes.
    pub(crate) fn reload_display(&mut self) {
        apply_output_preferences(self.mode, &self.config);
        self.session.set_format(self.config.display_format());
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(err);
                return Ok(LoopControl::Continue);
            }
        };

        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::info(format!("Suggestion: `{name}`?"));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        match super::io::confirm_action(self.surface.theme(), "Exit shell?", true) {
            Ok(answer) => Ok(answer),
            Err(CommandError::Dialoguer(err)) => Err(err.into()),
            Err(_) => Ok(true),
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                output::error(other);
                Ok(())
            }
        }
    }
}

fn apply_output_preferences(mode: CliMode, config: &Config) {
    output::set_preferences(OutputPreferences {
        plain_mode: config.plain_output || mode == CliMode::Script,
    });
}
