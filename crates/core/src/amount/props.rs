//! Property-based tests for amount encoding and validation.
//!
//! - Property 1: Encoded magnitude has exactly `exponent` fractional digits
//! - Property 2: Encoding is stable under a decode/encode cycle
//! - Property 3: Well-formed numerals are always accepted

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::monetary::{Amount, Money};
use super::validation::{MAX_AMOUNT_LEN, parse_amount, validate_amount};
use crate::currency::{self, Currency};

/// Strategy to generate magnitudes with up to 6 fractional digits.
fn magnitude() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64, 0u32..=6)
        .prop_map(|(n, scale)| Decimal::new(n, scale))
}

/// Strategy to pick any cataloged currency.
fn cataloged_currency() -> impl Strategy<Value = Currency> {
    let currencies: Vec<Currency> = currency::all().cloned().collect();
    prop::sample::select(currencies)
}

/// Strategy to generate numerals matching the amount pattern.
fn numeral() -> impl Strategy<Value = String> {
    prop_oneof![
        "-?[0-9]{1,20}",
        "-?[0-9]{0,10}\\.[0-9]{1,10}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property 1: fractional digits of the encoded string match the exponent.
    #[test]
    fn prop_encoded_value_has_exponent_digits(
        currency in cataloged_currency(),
        value in magnitude(),
    ) {
        let money = Money::new(currency.clone(), value);
        let encoded = money.encoded_value();

        let fraction_len = encoded.split_once('.').map_or(0, |(_, frac)| frac.len());
        match currency.exponent() {
            Some(exponent) => {
                prop_assert_eq!(fraction_len, exponent as usize);
            }
            None => {
                prop_assert_eq!(encoded, value.to_string());
            }
        }
    }

    /// Property 2: re-encoding a decoded amount gives the same JSON.
    #[test]
    fn prop_decode_encode_is_stable(
        currency in cataloged_currency(),
        value in magnitude(),
    ) {
        let first = serde_json::to_string(&Amount::new(currency, value)).unwrap();
        let decoded: Amount = serde_json::from_str(&first).unwrap();
        let second = serde_json::to_string(&decoded).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property 2b: the rounded value never moves more than half a minor unit.
    #[test]
    fn prop_rounding_error_is_bounded(
        currency in cataloged_currency(),
        value in magnitude(),
    ) {
        let money = Money::new(currency.clone(), value);
        if let Some(unit) = currency.minor_unit() {
            let error = (money.rounded() - value).abs();
            prop_assert!(error * Decimal::TWO <= unit);
        } else {
            prop_assert_eq!(money.rounded(), value);
        }
    }

    /// Property 3: pattern-conforming numerals within the length ceiling parse.
    #[test]
    fn prop_numerals_are_accepted(text in numeral()) {
        prop_assume!(text.len() <= MAX_AMOUNT_LEN);
        prop_assert!(validate_amount("value", &text).is_ok());
        prop_assert!(parse_amount("value", &text).is_ok());
    }

    /// Property 3b: text containing anything but digits, '-' and '.' is rejected.
    #[test]
    fn prop_foreign_characters_are_rejected(
        prefix in "[0-9]{0,5}",
        bad in "[a-zA-Z,+ _e]",
        suffix in "[0-9]{0,5}",
    ) {
        let text = format!("{prefix}{bad}{suffix}");
        prop_assert!(validate_amount("value", &text).is_err());
    }
}
