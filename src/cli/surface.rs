use dialoguer::theme::ColorfulTheme;
use tracing::warn;

use crate::cli::io;
use crate::cli::output;
use crate::cli::shell_context::CliMode;
use crate::cli::ui::table::{Table, TableColumn};
use crate::core::{DisplaySurface, ExpenseRow, ListView, UserPrompt};

pub const EMPTY_STATE_MESSAGE: &str = "No expenses recorded yet.";

const FALLBACK_DESCRIPTION_WIDTH: usize = 40;
const MIN_DESCRIPTION_WIDTH: usize = 12;
/// Columns other than the description, plus separators.
const FIXED_COLUMNS_WIDTH: usize = 52;

/// Renders the expense list on the terminal and asks through dialoguer.
pub struct TerminalSurface {
    mode: CliMode,
    theme: ColorfulTheme,
    assume_yes: bool,
}

impl TerminalSurface {
    pub fn new(mode: CliMode) -> Self {
        Self {
            mode,
            theme: ColorfulTheme::default(),
            assume_yes: false,
        }
    }

    pub fn theme(&self) -> &ColorfulTheme {
        &self.theme
    }

    /// Pre-answers the next confirmation with yes. Cleared after one use.
    pub fn assume_yes(&mut self) {
        self.assume_yes = true;
    }

    pub fn reset_answers(&mut self) {
        self.assume_yes = false;
    }

    fn description_width(&self) -> usize {
        if self.mode == CliMode::Script {
            return FALLBACK_DESCRIPTION_WIDTH;
        }
        crossterm::terminal::size()
            .map(|(cols, _)| (cols as usize).saturating_sub(FIXED_COLUMNS_WIDTH))
            .map(|width| width.max(MIN_DESCRIPTION_WIDTH))
            .unwrap_or(FALLBACK_DESCRIPTION_WIDTH)
    }
}

pub fn expense_table(rows: &[ExpenseRow], description_width: usize) -> Table {
    let mut table = Table::new(vec![
        TableColumn::right("ID"),
        TableColumn::left("Description").with_max_width(description_width),
        TableColumn::right("Amount"),
        TableColumn::left("Category").with_max_width(16),
        TableColumn::left("Date"),
    ]);
    for row in rows {
        table.push_row(vec![
            row.id.to_string(),
            row.description.clone(),
            row.amount.clone(),
            row.category.clone(),
            row.date.clone(),
        ]);
    }
    table
}

impl DisplaySurface for TerminalSurface {
    fn show_list(&mut self, view: &ListView) {
        output::section("Expenses");
        match view {
            ListView::Empty => output::info(EMPTY_STATE_MESSAGE),
            ListView::Rows(rows) => {
                output::info(expense_table(rows, self.description_width()).render())
            }
        }
    }

    fn show_total(&mut self, total: &str) {
        output::info(format!("Total: {total}"));
    }
}

impl UserPrompt for TerminalSurface {
    fn confirm(&mut self, message: &str) -> bool {
        if std::mem::take(&mut self.assume_yes) {
            return true;
        }
        match self.mode {
            CliMode::Script => {
                output::warning(format!("{message} Declined; pass `--yes` to confirm."));
                false
            }
            CliMode::Interactive => match io::confirm_action(&self.theme, message, false) {
                Ok(answer) => answer,
                Err(err) => {
                    warn!(error = %err, "confirmation prompt failed");
                    false
                }
            },
        }
    }

    fn alert(&mut self, message: &str) {
        output::error(message);
    }
}
