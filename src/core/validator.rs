use chrono::NaiveDate;

use crate::currency::{parse_amount, Money};
use crate::errors::ValidationError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Form fields that passed validation, normalised for storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    pub description: String,
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
}

/// Checks raw form fields. Fields are checked in form order and the first
/// failure is reported.
pub fn validate(
    description: &str,
    amount: &str,
    category: &str,
    date: &str,
) -> Result<ValidatedInput, ValidationError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }

    let amount = parse_amount(amount)?;
    if !amount.is_positive() {
        return Err(ValidationError::NonPositiveAmount);
    }

    let category = category.trim();
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }

    let date_text = date.trim();
    if date_text.is_empty() {
        return Err(ValidationError::EmptyDate);
    }
    let date = NaiveDate::parse_from_str(date_text, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(date_text.to_string()))?;

    Ok(ValidatedInput {
        description: description.to_string(),
        amount,
        category: category.to_string(),
        date,
    })
}
