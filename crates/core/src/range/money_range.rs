//! Closed interval of amounts in one currency.

use std::ops::RangeInclusive;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::amount::{AmountKeys, MonetaryAmount};
use crate::currency::Currency;
use crate::error::MoneyError;

/// A `[minimum, maximum]` pair of amounts sharing a currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(bound(serialize = "K: AmountKeys"))]
pub struct MoneyRange<K> {
    minimum: MonetaryAmount<K>,
    maximum: MonetaryAmount<K>,
}

impl<K: AmountKeys> MoneyRange<K> {
    /// Creates a range from two amounts.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` if the amounts use different currencies.
    pub fn new(minimum: MonetaryAmount<K>, maximum: MonetaryAmount<K>) -> Result<Self, MoneyError> {
        if minimum.currency() != maximum.currency() {
            tracing::debug!(
                minimum = %minimum.currency(),
                maximum = %maximum.currency(),
                "money range currencies differ"
            );
            return Err(MoneyError::CurrencyMismatch {
                expected: minimum.currency().to_string(),
                got: maximum.currency().to_string(),
            });
        }
        Ok(Self { minimum, maximum })
    }

    /// Creates a range from native bounds in a single currency.
    #[must_use]
    pub fn from_bounds(bounds: RangeInclusive<Decimal>, currency: Currency) -> Self {
        let (low, high) = bounds.into_inner();
        Self {
            minimum: MonetaryAmount::new(currency.clone(), low),
            maximum: MonetaryAmount::new(currency, high),
        }
    }

    /// Lower bound.
    #[must_use]
    pub const fn minimum(&self) -> &MonetaryAmount<K> {
        &self.minimum
    }

    /// Upper bound.
    #[must_use]
    pub const fn maximum(&self) -> &MonetaryAmount<K> {
        &self.maximum
    }

    /// Currency shared by both bounds.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        self.minimum.currency()
    }

    /// Returns true if `amount` has the range's currency and lies within it.
    ///
    /// Compares stored values, not rounded ones.
    #[must_use]
    pub fn contains(&self, amount: &MonetaryAmount<K>) -> bool {
        amount.currency() == self.currency()
            && (self.minimum.value()..=self.maximum.value()).contains(&amount.value())
    }
}

impl<'de, K: AmountKeys> Deserialize<'de> for MoneyRange<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(bound = "K: AmountKeys")]
        struct Bounds<K> {
            minimum: MonetaryAmount<K>,
            maximum: MonetaryAmount<K>,
        }

        let bounds = Bounds::<K>::deserialize(deserializer)?;
        Self::new(bounds.minimum, bounds.maximum).map_err(serde::de::Error::custom)
    }
}
