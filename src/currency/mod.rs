use std::{
    fmt,
    iter::Sum,
    ops::{Add, Sub},
    str::FromStr,
};

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Decimal places shown for every supported currency.
const DISPLAY_SCALE: u32 = 2;

/// Largest accepted amount, in major units.
pub const MAX_AMOUNT_MAJOR: i64 = 10_000_000_000_000;

/// Monetary value kept exactly as entered. Rounding happens only when
/// formatting, so `0.004` is a positive amount that displays as `0.00`.
///
/// `+` saturates; [`Money::checked_add`] is what the ledger uses to refuse a
/// record whose addition would leave the representable range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// `from_minor(1_250)` is `12.50`.
    pub fn from_minor(minor: i64) -> Self {
        Self(Decimal::new(minor, DISPLAY_SCALE))
    }

    pub fn from_major(major: i64) -> Self {
        Self(Decimal::from(major))
    }

    pub const fn value(self) -> Decimal {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Value rounded half away from zero to the display scale.
    pub fn rounded(self) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.normalize().fmt(f)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("no amount given")]
    Empty,
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("`{0}` is not a finite number")]
    NotFinite(String),
    #[error("`{0}` exceeds the largest supported amount")]
    OutOfRange(String),
}

/// Parses decimal text into money without rounding.
///
/// Sign is preserved; positivity is a validation concern.
/// Example: "150" -> 150, "12.5" -> 12.5, "0.004" -> 0.004, "1e3" -> 1000
pub fn parse_amount(input: &str) -> Result<Money, AmountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }

    let parsed = if trimmed.contains(['e', 'E']) {
        Decimal::from_scientific(trimmed)
    } else {
        Decimal::from_str(trimmed)
    };

    let value = match parsed {
        Ok(value) => value,
        // Text f64 accepts but Decimal does not is either non-finite or too large.
        Err(_) => {
            return Err(match trimmed.parse::<f64>() {
                Ok(float) if !float.is_finite() => AmountError::NotFinite(trimmed.to_string()),
                Ok(_) => AmountError::OutOfRange(trimmed.to_string()),
                Err(_) => AmountError::NotANumber(trimmed.to_string()),
            })
        }
    };

    if value.abs() > Decimal::from(MAX_AMOUNT_MAJOR) {
        return Err(AmountError::OutOfRange(trimmed.to_string()));
    }
    Ok(Money(value))
}

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("INR")
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateFormatStyle {
    /// `2024-01-05`
    Short,
    /// `05 Jan 2024`
    #[default]
    Medium,
    /// `Friday, 05 January 2024`
    Long,
}

impl DateFormatStyle {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "short" => Some(Self::Short),
            "medium" => Some(Self::Medium),
            "long" => Some(Self::Long),
            _ => None,
        }
    }
}

impl fmt::Display for DateFormatStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        };
        f.write_str(label)
    }
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: Option<char>,
    pub date_format: DateFormatStyle,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::for_tag("en-IN")
    }
}

impl LocaleConfig {
    /// Separators for a BCP 47 tag. Matches the full tag first, then the
    /// language subtag; anything unknown gets `.` and no grouping.
    pub fn for_tag(tag: &str) -> Self {
        let tag = tag.trim();
        let lowered = tag.to_ascii_lowercase();
        let language = lowered.split(['-', '_']).next().unwrap_or_default();

        let (decimal_separator, grouping_separator) = match (lowered.as_str(), language) {
            ("en-in", _) => ('.', None),
            ("de-ch", _) => ('.', Some('\'')),
            (_, "en" | "ja" | "zh" | "ko") => ('.', Some(',')),
            (_, "de" | "es" | "it" | "nl" | "pt" | "id" | "tr") => (',', Some('.')),
            (_, "fr" | "sv" | "nb" | "fi" | "pl" | "cs" | "ru") => (',', Some(' ')),
            _ => ('.', None),
        };

        Self {
            language_tag: tag.to_string(),
            decimal_separator,
            grouping_separator,
            date_format: DateFormatStyle::default(),
        }
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "INR" => "₹".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        _ => format!("{code} "),
    }
}

/// Renders money with the currency symbol and exactly two decimals, rounding
/// half away from zero.
/// Example: 150 INR -> "₹150.00", -12.345 USD -> "-$12.35", 0.004 INR -> "₹0.00"
pub fn format_money(amount: Money, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let rounded = amount.rounded().value();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = format!("{:.2}", rounded.abs());
    let (units, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let whole = match locale.grouping_separator {
        Some(separator) => group_digits(units, separator),
        None => units.to_string(),
    };

    format!(
        "{sign}{}{whole}{}{fraction}",
        symbol_for(code.as_str()),
        locale.decimal_separator
    )
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_date(locale: &LocaleConfig, date: NaiveDate) -> String {
    let pattern = match locale.date_format {
        DateFormatStyle::Short => "%Y-%m-%d",
        DateFormatStyle::Medium => "%d %b %Y",
        DateFormatStyle::Long => "%A, %d %B %Y",
    };
    date.format(pattern).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_keeps_entered_precision() {
        assert_eq!(parse_amount("150"), Ok(Money::from_major(150)));
        assert_eq!(parse_amount("12.5"), Ok(Money::from_minor(1_250)));
        assert_eq!(parse_amount(" 0.1 "), Ok(Money::from_minor(10)));
        assert_eq!(parse_amount("0.004"), Ok(Money::new(Decimal::new(4, 3))));
        assert_eq!(parse_amount("-5"), Ok(Money::from_major(-5)));
        assert_eq!(parse_amount("1e3"), Ok(Money::from_major(1_000)));
        assert!(parse_amount("0.001").unwrap().is_positive());
    }

    #[test]
    fn parse_amount_rejects_garbage() {
        assert_eq!(parse_amount(""), Err(AmountError::Empty));
        assert_eq!(parse_amount("   "), Err(AmountError::Empty));
        assert!(matches!(parse_amount("abc"), Err(AmountError::NotANumber(_))));
        assert!(matches!(parse_amount("12abc"), Err(AmountError::NotANumber(_))));
        assert!(matches!(parse_amount("twelve"), Err(AmountError::NotANumber(_))));
        assert!(matches!(parse_amount("NaN"), Err(AmountError::NotFinite(_))));
        assert!(matches!(parse_amount("inf"), Err(AmountError::NotFinite(_))));
        assert!(matches!(parse_amount("1e20"), Err(AmountError::OutOfRange(_))));
        assert!(matches!(parse_amount("1e300"), Err(AmountError::OutOfRange(_))));
    }

    #[test]
    fn format_money_rounds_only_for_display() {
        let inr = CurrencyCode::default();
        let locale = LocaleConfig::default();
        assert_eq!(format_money(Money::from_major(150), &inr, &locale), "₹150.00");
        assert_eq!(format_money(Money::ZERO, &inr, &locale), "₹0.00");
        assert_eq!(format_money(parse_amount("0.004").unwrap(), &inr, &locale), "₹0.00");
        assert_eq!(format_money(parse_amount("0.005").unwrap(), &inr, &locale), "₹0.01");
        assert_eq!(format_money(Money::from_major(123_456), &inr, &locale), "₹123456.00");

        let usd = CurrencyCode::new("usd");
        assert_eq!(format_money(parse_amount("-12.345").unwrap(), &usd, &locale), "-$12.35");
        assert_eq!(format_money(parse_amount("-0.001").unwrap(), &usd, &locale), "$0.00");
    }

    #[test]
    fn locale_tag_drives_separators() {
        let amount = Money::from_minor(123_456_789);
        let inr = CurrencyCode::default();
        let eur = CurrencyCode::new("EUR");

        assert_eq!(format_money(amount, &inr, &LocaleConfig::for_tag("en-IN")), "₹1234567.89");
        assert_eq!(format_money(amount, &eur, &LocaleConfig::for_tag("de-DE")), "€1.234.567,89");
        assert_eq!(format_money(amount, &eur, &LocaleConfig::for_tag("fr_FR")), "€1 234 567,89");
        assert_eq!(
            format_money(amount, &CurrencyCode::new("USD"), &LocaleConfig::for_tag("en-US")),
            "$1,234,567.89"
        );
        assert_eq!(
            format_money(Money::from_major(5), &CurrencyCode::new("CHF"), &LocaleConfig::for_tag("de-CH")),
            "CHF 5.00"
        );
        assert_eq!(format_money(Money::from_minor(99_900), &eur, &LocaleConfig::for_tag("it")), "€999,00");

        let unknown = LocaleConfig::for_tag("xx-YY");
        assert_eq!(unknown.language_tag, "xx-YY");
        assert_eq!((unknown.decimal_separator, unknown.grouping_separator), ('.', None));
    }

    #[test]
    fn money_sums_exactly() {
        let values = [Money::from_minor(10), Money::from_minor(20), Money::from_minor(30)];
        let total: Money = values.iter().sum();
        assert_eq!(total, Money::from_minor(60));
        assert_eq!(total - Money::from_minor(10), Money::from_minor(50));
        assert_eq!(
            parse_amount("0.004").unwrap() + parse_amount("0.004").unwrap(),
            Money::new(Decimal::new(8, 3))
        );
    }

    #[test]
    fn checked_add_detects_overflow() {
        let max = Money::new(Decimal::MAX);
        assert_eq!(max.checked_add(Money::from_minor(1)), None);
        assert_eq!(
            Money::from_major(1).checked_add(Money::from_minor(1)),
            Some(Money::from_minor(101))
        );
    }

    #[test]
    fn date_styles_render() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let mut locale = LocaleConfig::default();
        assert_eq!(format_date(&locale, date), "05 Jan 2024");
        locale.date_format = DateFormatStyle::Short;
        assert_eq!(format_date(&locale, date), "2024-01-05");
        locale.date_format = DateFormatStyle::Long;
        assert_eq!(format_date(&locale, date), "Friday, 05 January 2024");
    }

    #[test]
    fn date_style_parses_case_insensitively() {
        assert_eq!(DateFormatStyle::parse("LONG"), Some(DateFormatStyle::Long));
        assert_eq!(DateFormatStyle::parse("iso"), None);
    }
}
