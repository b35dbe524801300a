pub mod expense;
pub mod id;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use expense::{ExpenseId, ExpenseRecord};
pub use id::IdGenerator;
pub use ledger::{Ledger, LedgerState};
