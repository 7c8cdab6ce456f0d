//! Money error types.
//!
//! Every failure is raised where a value is constructed or decoded and is
//! never recovered locally.

use paypal_shared::ClientError;
use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised while building or decoding money values.
#[derive(Debug, Error)]
pub enum MoneyError {
    /// A bare currency code is not in the catalog.
    #[error("Unknown currency code: {code}")]
    UnknownCurrency {
        /// The offending code as received.
        code: String,
    },

    /// Amount text is not `-?(digits | digits? . digits)` or is longer than 32 characters.
    #[error(
        "Field `{field}` must be an optionally signed decimal numeral of at most 32 characters, got {value:?}"
    )]
    MalformedAmountString {
        /// Field name.
        field: &'static str,
        /// The offending text.
        value: String,
    },

    /// Amount text is well-formed but outside what `Decimal` can hold.
    #[error("Field `{field}` is not representable as a decimal: {value:?}")]
    NonDecimalValue {
        /// Field name.
        field: &'static str,
        /// The offending text.
        value: String,
    },

    /// A bounded integer fell outside its domain.
    #[error("Field `{field}` must be within {min}..={max}, got {value}")]
    RangeBoundViolation {
        /// Field name.
        field: &'static str,
        /// The rejected value.
        value: i64,
        /// Lowest allowed value.
        min: i64,
        /// Highest allowed value.
        max: i64,
    },

    /// Two amounts that must share a currency do not.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch {
        /// Currency of the first amount.
        expected: String,
        /// Currency of the second amount.
        got: String,
    },

    /// Input was not structurally valid JSON for the target shape.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl MoneyError {
    /// Returns the error code for logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCurrency { .. } => "UNKNOWN_CURRENCY",
            Self::MalformedAmountString { .. } => "MALFORMED_AMOUNT",
            Self::NonDecimalValue { .. } => "NON_DECIMAL_VALUE",
            Self::RangeBoundViolation { .. } => "RANGE_BOUND_VIOLATION",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::Json(_) => "INVALID_JSON",
        }
    }

    /// Returns the PayPal machine identifier for this failure.
    #[must_use]
    pub const fn identifier(&self) -> &'static str {
        match self {
            Self::UnknownCurrency { .. } | Self::NonDecimalValue { .. } => "badValue",
            Self::MalformedAmountString { .. } => "invalidFormat",
            Self::RangeBoundViolation { .. } => "outOfRange",
            Self::CurrencyMismatch { .. } => "currencyMismatch",
            Self::Json(_) => "malformedJson",
        }
    }
}

impl From<MoneyError> for ClientError {
    fn from(err: MoneyError) -> Self {
        match err {
            MoneyError::UnknownCurrency { .. } | MoneyError::NonDecimalValue { .. } => {
                Self::BadRequest {
                    identifier: err.identifier(),
                    reason: err.to_string(),
                }
            }
            MoneyError::Json(_) => Self::Decode(err.to_string()),
            MoneyError::MalformedAmountString { .. }
            | MoneyError::RangeBoundViolation { .. }
            | MoneyError::CurrencyMismatch { .. } => Self::Validation(err.to_string()),
        }
    }
}
