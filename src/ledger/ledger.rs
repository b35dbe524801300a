use tracing::{error, info};

use crate::currency::Money;
use crate::errors::LedgerError;

use super::{ExpenseId, ExpenseRecord};

/// Whether the ledger currently holds any expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerState {
    Empty,
    NonEmpty,
}

/// Ordered, in-memory collection of expenses for the current session.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends to the end. Fails if the id is already present; never overwrites.
    pub fn append(&mut self, record: ExpenseRecord) -> Result<(), LedgerError> {
        if self.contains(record.id) {
            error!(id = %record.id, "refusing to append duplicate expense id");
            return Err(LedgerError::DuplicateIdentifier(record.id));
        }
        if self.checked_total().and_then(|total| total.checked_add(record.amount)).is_none() {
            error!(id = %record.id, "refusing expense that would overflow the total");
            return Err(LedgerError::TotalOverflow(record.id));
        }
        info!(id = %record.id, amount = %record.amount, "expense appended");
        self.records.push(record);
        Ok(())
    }

    /// Removes the expense with `id`. Absent ids are a no-op and return `None`.
    pub fn take(&mut self, id: ExpenseId) -> Option<ExpenseRecord> {
        let index = self.records.iter().position(|record| record.id == id)?;
        let removed = self.records.remove(index);
        info!(id = %id, "expense removed");
        Some(removed)
    }

    /// Removes the expense with `id`, reporting whether anything was removed.
    pub fn remove(&mut self, id: ExpenseId) -> bool {
        self.take(id).is_some()
    }

    /// Current contents in insertion order.
    pub fn all(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn get(&self, id: ExpenseId) -> Option<&ExpenseRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn contains(&self, id: ExpenseId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn checked_total(&self) -> Option<Money> {
        self.records
            .iter()
            .try_fold(Money::ZERO, |total, record| total.checked_add(record.amount))
    }

    pub fn state(&self) -> LedgerState {
        if self.is_empty() {
            LedgerState::Empty
        } else {
            LedgerState::NonEmpty
        }
    }
}
