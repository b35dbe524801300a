use crate::config::Config;
use crate::core::ExpenseSession;

use super::registry::CommandRegistry;
use super::surface::TerminalSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub session: ExpenseSession,
    pub surface: TerminalSurface,
    pub config: Config,
    pub running: bool,
}

impl ShellContext {
    pub fn prompt(&self) -> String {
        format!("expenses [{}] ⮞ ", self.session.ledger().len())
    }
}
