//! JSON key sets an amount can serialize under.

use std::fmt::Debug;
use std::hash::Hash;

/// Names the two keys of a serialized amount.
///
/// Implemented by zero-sized markers; the choice is made per field type, not
/// per value.
pub trait AmountKeys: Debug + Clone + Copy + PartialEq + Eq + Hash + Send + Sync + 'static {
    /// Key holding the currency.
    const CURRENCY: &'static str;
    /// Key holding the magnitude string.
    const VALUE: &'static str;
}

/// `{ "currency": ..., "value": ... }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CurrencyKeys;

impl AmountKeys for CurrencyKeys {
    const CURRENCY: &'static str = "currency";
    const VALUE: &'static str = "value";
}

/// `{ "currency_code": ..., "value": ... }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CurrencyCodeKeys;

impl AmountKeys for CurrencyCodeKeys {
    const CURRENCY: &'static str = "currency_code";
    const VALUE: &'static str = "value";
}
