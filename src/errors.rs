use thiserror::Error;

use crate::config::ConfigError;
use crate::currency::AmountError;
use crate::ledger::ExpenseId;

/// Message shown to the user whenever a submitted expense is rejected.
pub const INVALID_INPUT_MESSAGE: &str = "Please fill in all fields with valid values.";

/// Failures that can occur while mutating the ledger.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// An identifier was issued twice. Indicates a broken id generator.
    #[error("Expense id {0} is already present in the ledger")]
    DuplicateIdentifier(ExpenseId),
    /// Adding the record would push the total out of the representable range.
    #[error("Expense id {0} would overflow the ledger total")]
    TotalOverflow(ExpenseId),
}

/// Reasons a submitted expense form is not accepted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Description must not be empty")]
    EmptyDescription,
    #[error("Amount is invalid: {0}")]
    InvalidAmount(#[from] AmountError),
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,
    #[error("Category must be selected")]
    EmptyCategory,
    #[error("Date must not be empty")]
    EmptyDate,
    #[error("Date `{0}` is not a valid YYYY-MM-DD date")]
    InvalidDate(String),
}

impl ValidationError {
    /// Single user-facing message; the variant detail is kept for logs.
    pub fn user_message(&self) -> &'static str {
        INVALID_INPUT_MESSAGE
    }
}

/// Fatal errors that stop the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}
