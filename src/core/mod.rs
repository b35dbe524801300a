//! Expense logic independent of any presentation surface.

pub mod aggregator;
pub mod clock;
pub mod presenter;
pub mod session;
pub mod validator;

pub use aggregator::total;
pub use clock::{Clock, FixedClock, SystemClock};
pub use presenter::{
    DisplayFormat, DisplaySurface, ExpenseRow, ListView, Presenter, Surface, UserPrompt,
};
pub use session::{Command, CommandOutcome, ExpenseForm, ExpenseSession, DELETE_CONFIRMATION};
pub use validator::{validate, ValidatedInput};
