//! Process-wide currency catalog.
//!
//! Built once from the literal table on first use and never mutated, so it is
//! shared between threads without locking.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::table::CURRENCIES;
use super::types::Currency;

static CATALOG: Lazy<HashMap<&'static str, &'static Currency>> = Lazy::new(|| {
    CURRENCIES
        .iter()
        .map(|currency| (currency.code(), currency))
        .collect()
});

/// Looks up a currency by code, ignoring ASCII case.
///
/// # Example
///
/// ```
/// use paypal_core::currency;
///
/// let usd = currency::lookup("usd").unwrap();
/// assert_eq!(usd.numeric_code(), 840);
/// assert!(currency::lookup("ZZZ").is_none());
/// ```
#[must_use]
pub fn lookup(code: &str) -> Option<&'static Currency> {
    CATALOG.get(code.to_ascii_uppercase().as_str()).copied()
}

/// Iterates over every cataloged currency. Order is not significant.
pub fn all() -> impl Iterator<Item = &'static Currency> {
    CURRENCIES.iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_catalog_round_trip() {
        for currency in all() {
            assert_eq!(lookup(currency.code()), Some(currency));
            assert_eq!(lookup(&currency.code().to_lowercase()), Some(currency));
        }
    }

    #[test]
    fn test_codes_are_unique() {
        assert_eq!(CATALOG.len(), CURRENCIES.len());
    }

    #[test]
    fn test_catalog_size() {
        assert!(all().count() >= 175);
    }

    #[test]
    fn test_unknown_code() {
        assert!(lookup("ZZZ").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("US").is_none());
    }

    #[rstest]
    #[case("ALL", 8, Some(2))]
    #[case("DZD", 12, Some(2))]
    #[case("USD", 840, Some(2))]
    #[case("JPY", 392, Some(0))]
    #[case("KWD", 414, Some(3))]
    #[case("CLF", 990, Some(4))]
    #[case("XAU", 959, None)]
    #[case("XDR", 960, None)]
    #[case("XXX", 999, None)]
    #[case("C2", 156, Some(2))]
    fn test_table_entries(#[case] code: &str, #[case] numeric: u16, #[case] exponent: Option<u32>) {
        let currency = lookup(code).unwrap();
        assert_eq!(currency.numeric_code(), numeric);
        assert_eq!(currency.exponent(), exponent);
    }

    #[test]
    fn test_no_currency_entry() {
        assert_eq!(lookup("xxx").unwrap().name(), "No currency");
    }
}
