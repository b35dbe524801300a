//! Command dispatch over an explicitly owned ledger.
//!
//! Each user action becomes a [`Command`] applied synchronously, followed by a
//! single re-render of the list and the total.

use tracing::{info, warn};

use crate::core::clock::{Clock, SystemClock};
use crate::core::presenter::{DisplayFormat, Presenter, Surface};
use crate::core::validator::validate;
use crate::currency::Money;
use crate::errors::{LedgerError, ValidationError};
use crate::ledger::{ExpenseId, ExpenseRecord, IdGenerator, Ledger, LedgerState};

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this expense?";

/// Raw field values as entered on the input surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub description: String,
    pub amount: String,
    pub category: String,
    /// `None` means the date was left at its default (today).
    pub date: Option<String>,
}

impl ExpenseForm {
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            category: category.into(),
            date: None,
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddExpense(ExpenseForm),
    DeleteExpense(ExpenseId),
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Added(ExpenseId),
    Rejected(ValidationError),
    Deleted(ExpenseRecord),
    Declined(ExpenseId),
    NotFound(ExpenseId),
    Refreshed,
}

pub struct ExpenseSession {
    ledger: Ledger,
    ids: IdGenerator,
    presenter: Presenter,
    clock: Box<dyn Clock>,
}

impl Default for ExpenseSession {
    fn default() -> Self {
        Self::new(DisplayFormat::default())
    }
}

impl ExpenseSession {
    pub fn new(format: DisplayFormat) -> Self {
        Self::with_clock(format, Box::new(SystemClock))
    }

    pub fn with_clock(format: DisplayFormat, clock: Box<dyn Clock>) -> Self {
        Self {
            ledger: Ledger::new(),
            ids: IdGenerator::new(),
            presenter: Presenter::new(format),
            clock,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    pub fn set_format(&mut self, format: DisplayFormat) {
        self.presenter.set_format(format);
    }

    pub fn state(&self) -> LedgerState {
        self.ledger.state()
    }

    pub fn total(&self) -> Money {
        crate::core::aggregator::total(self.ledger.all())
    }

    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    /// Applies `command`. Only a broken identifier invariant surfaces as `Err`.
    pub fn dispatch<S: Surface + ?Sized>(
        &mut self,
        command: Command,
        surface: &mut S,
    ) -> Result<CommandOutcome, LedgerError> {
        match command {
            Command::AddExpense(form) => self.add(form, surface),
            Command::DeleteExpense(id) => Ok(self.delete(id, surface)),
            Command::Refresh => {
                self.presenter.refresh(&self.ledger, surface);
                Ok(CommandOutcome::Refreshed)
            }
        }
    }

    fn add<S: Surface + ?Sized>(
        &mut self,
        form: ExpenseForm,
        surface: &mut S,
    ) -> Result<CommandOutcome, LedgerError> {
        let date = form
            .date
            .unwrap_or_else(|| self.clock.today().format("%Y-%m-%d").to_string());

        let input = match validate(&form.description, &form.amount, &form.category, &date) {
            Ok(input) => input,
            Err(err) => {
                warn!(reason = %err, "expense rejected");
                surface.alert(err.user_message());
                return Ok(CommandOutcome::Rejected(err));
            }
        };

        let id = self.ids.next_id();
        self.ledger.append(ExpenseRecord::from_validated(id, input))?;
        self.presenter.refresh(&self.ledger, surface);
        Ok(CommandOutcome::Added(id))
    }

    fn delete<S: Surface + ?Sized>(&mut self, id: ExpenseId, surface: &mut S) -> CommandOutcome {
        if !self.ledger.contains(id) {
            info!(id = %id, "delete requested for unknown expense");
            return CommandOutcome::NotFound(id);
        }
        match self
            .presenter
            .delete(&mut self.ledger, id, DELETE_CONFIRMATION, surface)
        {
            Some(record) => CommandOutcome::Deleted(record),
            None => CommandOutcome::Declined(id),
        }
    }
}
