//! Validation of amount text before it reaches the decimal parser.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::error::MoneyError;

/// Longest amount text accepted, sign and point included.
pub const MAX_AMOUNT_LEN: usize = 32;

static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?([0-9]+|[0-9]*\.[0-9]+)$").expect("amount pattern compiles"));

/// Checks amount text against the numeral pattern and length ceiling.
///
/// # Errors
///
/// Returns `MoneyError::MalformedAmountString` naming `field`.
pub fn validate_amount(field: &'static str, text: &str) -> Result<(), MoneyError> {
    if text.len() <= MAX_AMOUNT_LEN && AMOUNT_PATTERN.is_match(text) {
        return Ok(());
    }
    tracing::debug!(field, text, "rejected malformed amount text");
    Err(MoneyError::MalformedAmountString {
        field,
        value: text.to_string(),
    })
}

/// Validates amount text and converts it to a `Decimal` without rounding.
///
/// # Errors
///
/// Returns `MoneyError::MalformedAmountString` if the text fails validation and
/// `MoneyError::NonDecimalValue` if it does not fit a `Decimal` exactly.
pub fn parse_amount(field: &'static str, text: &str) -> Result<Decimal, MoneyError> {
    validate_amount(field, text)?;

    // ".25" and "-.25" are valid numerals; give the parser a leading zero.
    let normalized: Cow<'_, str> = match text.strip_prefix('-') {
        Some(rest) if rest.starts_with('.') => Cow::Owned(format!("-0{rest}")),
        None if text.starts_with('.') => Cow::Owned(format!("0{text}")),
        _ => Cow::Borrowed(text),
    };

    Decimal::from_str_exact(&normalized).map_err(|_| {
        tracing::debug!(field, text, "amount text exceeds decimal range");
        MoneyError::NonDecimalValue {
            field,
            value: text.to_string(),
        }
    })
}
