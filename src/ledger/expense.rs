use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::validator::ValidatedInput;
use crate::currency::Money;

/// Identifier that keys an expense for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ExpenseId(u64);

impl ExpenseId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(Self)
    }
}

/// One user-entered expense. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: ExpenseId,
    pub description: String,
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
}

impl ExpenseRecord {
    pub fn from_validated(id: ExpenseId, input: ValidatedInput) -> Self {
        Self {
            id,
            description: input.description,
            amount: input.amount,
            category: input.category,
            date: input.date,
        }
    }
}
