//! Turns ledger contents into display rows and drives the delete action.

use tracing::debug;

use crate::core::aggregator;
use crate::currency::{format_date, format_money, CurrencyCode, LocaleConfig, Money};
use crate::ledger::{ExpenseId, ExpenseRecord, Ledger};

/// One rendered expense. The `id` is what a delete action is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRow {
    pub id: ExpenseId,
    pub description: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl ExpenseRow {
    /// `Coffee | ₹150.00 | Food | 05 Jan 2024`
    pub fn summary(&self) -> String {
        format!(
            "{} | {} | {} | {}",
            self.description, self.amount, self.category, self.date
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Empty,
    Rows(Vec<ExpenseRow>),
}

impl ListView {
    pub fn rows(&self) -> &[ExpenseRow] {
        match self {
            ListView::Empty => &[],
            ListView::Rows(rows) => rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ListView::Empty)
    }
}

/// Where the list and the total end up.
pub trait DisplaySurface {
    fn show_list(&mut self, view: &ListView);
    fn show_total(&mut self, total: &str);
}

/// Blocking user interaction primitives.
pub trait UserPrompt {
    fn confirm(&mut self, message: &str) -> bool;
    fn alert(&mut self, message: &str);
}

/// A complete presentation surface: display plus prompts.
pub trait Surface: DisplaySurface + UserPrompt {}

impl<T: DisplaySurface + UserPrompt + ?Sized> Surface for T {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayFormat {
    pub currency: CurrencyCode,
    pub locale: LocaleConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Presenter {
    format: DisplayFormat,
}

impl Presenter {
    pub fn new(format: DisplayFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> &DisplayFormat {
        &self.format
    }

    pub fn set_format(&mut self, format: DisplayFormat) {
        self.format = format;
    }

    pub fn format_amount(&self, amount: Money) -> String {
        format_money(amount, &self.format.currency, &self.format.locale)
    }

    pub fn row(&self, record: &ExpenseRecord) -> ExpenseRow {
        ExpenseRow {
            id: record.id,
            description: record.description.clone(),
            amount: self.format_amount(record.amount),
            category: record.category.clone(),
            date: format_date(&self.format.locale, record.date),
        }
    }

    pub fn view(&self, records: &[ExpenseRecord]) -> ListView {
        if records.is_empty() {
            ListView::Empty
        } else {
            ListView::Rows(records.iter().map(|record| self.row(record)).collect())
        }
    }

    pub fn render<S: DisplaySurface + ?Sized>(&self, records: &[ExpenseRecord], surface: &mut S) {
        debug!(rows = records.len(), "rendering expense list");
        surface.show_list(&self.view(records));
    }

    pub fn render_total<S: DisplaySurface + ?Sized>(&self, amount: Money, surface: &mut S) {
        surface.show_total(&self.format_amount(amount));
    }

    /// Re-draws the list and the total from the ledger's current contents.
    pub fn refresh<S: DisplaySurface + ?Sized>(&self, ledger: &Ledger, surface: &mut S) {
        self.render(ledger.all(), surface);
        self.render_total(aggregator::total(ledger.all()), surface);
    }

    /// Delete action bound to a row: asks first, removes only when confirmed,
    /// then re-renders. Returns the removed record.
    pub fn delete<S: Surface + ?Sized>(
        &self,
        ledger: &mut Ledger,
        id: ExpenseId,
        message: &str,
        surface: &mut S,
    ) -> Option<ExpenseRecord> {
        if !surface.confirm(message) {
            debug!(id = %id, "deletion declined");
            return None;
        }
        let removed = ledger.take(id);
        self.refresh(ledger, surface);
        removed
    }
}
