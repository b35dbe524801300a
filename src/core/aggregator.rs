use crate::currency::Money;
use crate::ledger::ExpenseRecord;

/// Sum of amounts over `records`; zero when empty.
pub fn total(records: &[ExpenseRecord]) -> Money {
    records.iter().map(|record| record.amount).sum()
}
