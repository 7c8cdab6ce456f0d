//! Monetary amounts: validation, rounding, and keyed JSON encoding.

pub mod keys;
pub mod monetary;
pub mod validation;

#[cfg(test)]
mod props;

pub use keys::{AmountKeys, CurrencyCodeKeys, CurrencyKeys};
pub use monetary::{Amount, MonetaryAmount, Money};
pub use validation::{MAX_AMOUNT_LEN, parse_amount, validate_amount};
