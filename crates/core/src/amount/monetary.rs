//! Monetary amount with currency-aware rounding.
//!
//! CRITICAL: the stored value is never rounded. Rounding to the currency
//! exponent (banker's rounding) happens only when the amount is encoded.

use std::fmt;
use std::marker::PhantomData;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::keys::{AmountKeys, CurrencyCodeKeys, CurrencyKeys};
use super::validation::parse_amount;
use crate::currency::{Currency, CurrencyRepr};
use crate::error::MoneyError;

/// A currency paired with an arbitrary-precision magnitude.
///
/// `K` selects the JSON key names; see [`AmountKeys`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MonetaryAmount<K> {
    currency: Currency,
    value: Decimal,
    keys: PhantomData<K>,
}

/// Amount serialized as `{ "currency": ..., "value": ... }`.
pub type Amount = MonetaryAmount<CurrencyKeys>;

/// Amount serialized as `{ "currency_code": ..., "value": ... }`.
pub type Money = MonetaryAmount<CurrencyCodeKeys>;

impl<K: AmountKeys> MonetaryAmount<K> {
    /// Creates an amount from an already-typed decimal.
    #[must_use]
    pub const fn new(currency: Currency, value: Decimal) -> Self {
        Self {
            currency,
            value,
            keys: PhantomData,
        }
    }

    /// Creates a zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self::new(currency, Decimal::ZERO)
    }

    /// Creates an amount from magnitude text.
    ///
    /// # Errors
    ///
    /// Returns `MalformedAmountString` or `NonDecimalValue` for bad text.
    pub fn parse(currency: Currency, text: &str) -> Result<Self, MoneyError> {
        Ok(Self::new(currency, parse_amount(K::VALUE, text)?))
    }

    /// Decodes an amount from JSON, keeping money errors typed.
    ///
    /// # Errors
    ///
    /// Returns `Json` for structural problems and the money variants for
    /// rejected currencies or magnitudes.
    pub fn from_json(input: &str) -> Result<Self, MoneyError> {
        let mut deserializer = serde_json::Deserializer::from_str(input);
        let raw = (&mut deserializer).deserialize_map(RawAmountVisitor::<K>(PhantomData))?;
        deserializer.end()?;
        Self::from_raw(raw)
    }

    /// Decodes an amount from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Same as [`MonetaryAmount::from_json`].
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, MoneyError> {
        let raw = value.deserialize_map(RawAmountVisitor::<K>(PhantomData))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawAmount) -> Result<Self, MoneyError> {
        let currency = raw.currency.resolve()?;
        Self::parse(currency, &raw.value)
    }

    /// Currency of this amount.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Stored, unrounded magnitude.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }

    /// Replaces the magnitude from text, keeping the old one on error.
    ///
    /// # Errors
    ///
    /// Returns `MalformedAmountString` or `NonDecimalValue` for bad text.
    pub fn set_value(&mut self, text: &str) -> Result<(), MoneyError> {
        self.value = parse_amount(K::VALUE, text)?;
        Ok(())
    }

    /// Returns a copy with a different magnitude.
    #[must_use]
    pub fn with_value(&self, value: Decimal) -> Self {
        Self::new(self.currency.clone(), value)
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.value.is_sign_negative() && !self.value.is_zero()
    }

    /// Value rounded half-to-even to the currency exponent.
    ///
    /// Currencies without an exponent return the stored value unchanged.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        match self.currency.exponent() {
            Some(exponent) => self
                .value
                .round_dp_with_strategy(exponent, RoundingStrategy::MidpointNearestEven),
            None => self.value,
        }
    }

    /// Magnitude as it goes on the wire.
    ///
    /// Always shows exactly `exponent` fractional digits (`50` in USD is
    /// `"50.00"`); currencies without an exponent use the natural
    /// representation.
    #[must_use]
    pub fn encoded_value(&self) -> String {
        let mut rounded = self.rounded();
        let exponent = self.currency.exponent();
        if let Some(exponent) = exponent {
            rounded.rescale(exponent);
        }
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }

        let mut encoded = rounded.to_string();
        // `rescale` stops short when the mantissa would overflow 96 bits.
        if let Some(exponent) = exponent {
            let missing = exponent.saturating_sub(rounded.scale());
            if missing > 0 {
                if rounded.scale() == 0 {
                    encoded.push('.');
                }
                encoded.extend(std::iter::repeat_n('0', missing as usize));
            }
        }
        encoded
    }

    /// Moves the amount to a different key set.
    #[must_use]
    pub fn rekey<K2: AmountKeys>(self) -> MonetaryAmount<K2> {
        MonetaryAmount::new(self.currency, self.value)
    }
}

impl<K: AmountKeys> fmt::Display for MonetaryAmount<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.encoded_value(), self.currency)
    }
}

impl<K: AmountKeys> Serialize for MonetaryAmount<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(K::CURRENCY, &self.currency)?;
        map.serialize_entry(K::VALUE, &self.encoded_value())?;
        map.end()
    }
}

impl<'de, K: AmountKeys> Deserialize<'de> for MonetaryAmount<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = deserializer.deserialize_map(RawAmountVisitor::<K>(PhantomData))?;
        Self::from_raw(raw).map_err(de::Error::custom)
    }
}

/// Keyed fields as received, before currency resolution and text validation.
struct RawAmount {
    currency: CurrencyRepr,
    value: String,
}

struct RawAmountVisitor<K>(PhantomData<K>);

impl<'de, K: AmountKeys> Visitor<'de> for RawAmountVisitor<K> {
    type Value = RawAmount;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an object with `{}` and `{}` keys", K::CURRENCY, K::VALUE)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawAmount, A::Error> {
        let mut currency: Option<CurrencyRepr> = None;
        let mut value: Option<String> = None;

        while let Some(key) = map.next_key::<String>()? {
            if key == K::CURRENCY {
                if currency.is_some() {
                    return Err(de::Error::duplicate_field(K::CURRENCY));
                }
                currency = Some(map.next_value()?);
            } else if key == K::VALUE {
                if value.is_some() {
                    return Err(de::Error::duplicate_field(K::VALUE));
                }
                value = Some(map.next_value()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(RawAmount {
            currency: currency.ok_or_else(|| de::Error::missing_field(K::CURRENCY))?,
            value: value.ok_or_else(|| de::Error::missing_field(K::VALUE))?,
        })
    }
}
