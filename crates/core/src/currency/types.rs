//! The `Currency` value type and its wire representations.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::catalog;
use crate::error::MoneyError;

/// Highest ISO 4217 numeric code.
pub const MAX_NUMERIC_CODE: u16 = 999;

/// Highest exponent a `Decimal` can represent.
pub const MAX_EXPONENT: u32 = 28;

fn check_domain(field: &'static str, value: u32, max: u32) -> Result<(), MoneyError> {
    if value <= max {
        return Ok(());
    }
    tracing::debug!(field, value, max, "currency shape field out of range");
    Err(MoneyError::RangeBoundViolation {
        field,
        value: i64::from(value),
        min: 0,
        max: i64::from(max),
    })
}

/// One ISO 4217 currency.
///
/// Serializes as its code. Deserializes from either a bare code (resolved
/// through the catalog) or a full `{ "code", "number", "e", "name" }` object,
/// which is taken as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Currency {
    code: Cow<'static, str>,
    numeric_code: u16,
    exponent: Option<u32>,
    name: Cow<'static, str>,
}

impl Currency {
    pub(super) const fn catalog(
        code: &'static str,
        numeric_code: u16,
        exponent: Option<u32>,
        name: &'static str,
    ) -> Self {
        Self {
            code: Cow::Borrowed(code),
            numeric_code,
            exponent,
            name: Cow::Borrowed(name),
        }
    }

    /// Builds a currency that is not resolved through the catalog.
    ///
    /// The code is upper-cased.
    ///
    /// # Errors
    ///
    /// Returns `RangeBoundViolation` if `numeric_code` is above 999 or
    /// `exponent` is above 28.
    pub fn new(
        code: impl Into<String>,
        numeric_code: u16,
        exponent: Option<u32>,
        name: impl Into<String>,
    ) -> Result<Self, MoneyError> {
        check_domain("number", u32::from(numeric_code), u32::from(MAX_NUMERIC_CODE))?;
        if let Some(e) = exponent {
            check_domain("e", e, MAX_EXPONENT)?;
        }
        Ok(Self {
            code: Cow::Owned(code.into().to_ascii_uppercase()),
            numeric_code,
            exponent,
            name: Cow::Owned(name.into()),
        })
    }

    /// Resolves a code through the catalog.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::UnknownCurrency` if the code is not cataloged.
    pub fn resolve(code: &str) -> Result<Self, MoneyError> {
        catalog::lookup(code).cloned().ok_or_else(|| {
            tracing::debug!(code, "currency code not in catalog");
            MoneyError::UnknownCurrency {
                code: code.to_string(),
            }
        })
    }

    /// Alphabetic code, e.g. `USD`.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// ISO 4217 numeric code, e.g. `840`.
    #[must_use]
    pub const fn numeric_code(&self) -> u16 {
        self.numeric_code
    }

    /// Digits after the decimal separator, `None` for units without a minor unit.
    #[must_use]
    pub const fn exponent(&self) -> Option<u32> {
        self.exponent
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Smallest representable step, e.g. `0.01` for USD and `1` for JPY.
    #[must_use]
    pub fn minor_unit(&self) -> Option<Decimal> {
        self.exponent.map(|e| Decimal::new(1, e))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        CurrencyRepr::deserialize(deserializer)?
            .resolve()
            .map_err(serde::de::Error::custom)
    }
}

/// A currency as it appears on the wire, before catalog resolution.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum CurrencyRepr {
    Code(String),
    Shape(CurrencyShape),
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CurrencyShape {
    code: String,
    number: u16,
    #[serde(default)]
    e: Option<u32>,
    name: String,
}

impl CurrencyRepr {
    pub(crate) fn resolve(self) -> Result<Currency, MoneyError> {
        match self {
            Self::Code(code) => Currency::resolve(&code),
            Self::Shape(shape) => Currency::new(shape.code, shape.number, shape.e, shape.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_resolve_known_code() {
        let usd = Currency::resolve("usd").unwrap();
        assert_eq!(usd.code(), "USD");
        assert_eq!(usd.numeric_code(), 840);
        assert_eq!(usd.exponent(), Some(2));
        assert_eq!(usd.name(), "US Dollar");
    }

    #[test]
    fn test_resolve_unknown_code() {
        let err = Currency::resolve("ZZZ").unwrap_err();
        assert!(matches!(err, MoneyError::UnknownCurrency { ref code } if code == "ZZZ"));
    }

    #[test]
    fn test_minor_unit() {
        assert_eq!(Currency::resolve("USD").unwrap().minor_unit(), Some(dec!(0.01)));
        assert_eq!(Currency::resolve("JPY").unwrap().minor_unit(), Some(dec!(1)));
        assert_eq!(Currency::resolve("BHD").unwrap().minor_unit(), Some(dec!(0.001)));
        assert_eq!(Currency::resolve("XAU").unwrap().minor_unit(), None);
    }

    #[test]
    fn test_display_and_from_str() {
        let eur: Currency = "eur".parse().unwrap();
        assert_eq!(eur.to_string(), "EUR");
        assert!("".parse::<Currency>().is_err());
    }

    #[test]
    fn test_ad_hoc_currency_equals_catalog_entry_with_same_shape() {
        let ad_hoc = Currency::new("usd", 840, Some(2), "US Dollar").unwrap();
        assert_eq!(ad_hoc, Currency::resolve("USD").unwrap());
    }

    #[test]
    fn test_new_accepts_domain_limits() {
        let currency = Currency::new("QQQ", 999, Some(28), "Edge").unwrap();
        assert_eq!(currency.minor_unit(), Some(Decimal::new(1, 28)));
    }

    #[test]
    fn test_new_rejects_out_of_domain_fields() {
        let err = Currency::new("QQQ", 1, Some(29), "x").unwrap_err();
        assert!(matches!(
            err,
            MoneyError::RangeBoundViolation { field: "e", value: 29, min: 0, max: 28 }
        ));

        let err = Currency::new("QQQ", 1000, Some(2), "x").unwrap_err();
        assert!(matches!(
            err,
            MoneyError::RangeBoundViolation { field: "number", value: 1000, min: 0, max: 999 }
        ));
    }

    #[test]
    fn test_deserialize_shape_with_oversized_exponent_fails() {
        let json = r#"{"code":"QQQ","number":1,"e":40,"name":"x"}"#;
        let err = serde_json::from_str::<Currency>(json).unwrap_err();
        assert!(err.to_string().contains("`e`"));
    }

    #[test]
    fn test_deserialize_shape_with_oversized_number_fails() {
        let json = r#"{"code":"QQQ","number":4000,"e":2,"name":"x"}"#;
        let err = serde_json::from_str::<Currency>(json).unwrap_err();
        assert!(err.to_string().contains("`number`"));
    }

    #[test]
    fn test_serialize_as_code() {
        let json = serde_json::to_string(&Currency::resolve("GBP").unwrap()).unwrap();
        assert_eq!(json, r#""GBP""#);
    }

    #[test]
    fn test_deserialize_from_code() {
        let jpy: Currency = serde_json::from_str(r#""jpy""#).unwrap();
        assert_eq!(jpy.code(), "JPY");
        assert_eq!(jpy.exponent(), Some(0));
    }

    #[test]
    fn test_deserialize_unknown_code_fails() {
        let err = serde_json::from_str::<Currency>(r#""ZZZ""#).unwrap_err();
        assert!(err.to_string().contains("ZZZ"));
    }

    #[test]
    fn test_deserialize_full_shape_bypasses_catalog() {
        let json = r#"{"code":"QQQ","number":1,"e":3,"name":"Custom"}"#;
        let currency: Currency = serde_json::from_str(json).unwrap();
        assert_eq!(currency.code(), "QQQ");
        assert_eq!(currency.numeric_code(), 1);
        assert_eq!(currency.exponent(), Some(3));
        assert_eq!(currency.name(), "Custom");
    }

    #[test]
    fn test_deserialize_full_shape_without_exponent() {
        let json = r#"{"code":"XTS","number":963,"e":null,"name":"Testing"}"#;
        let currency: Currency = serde_json::from_str(json).unwrap();
        assert_eq!(currency.exponent(), None);

        let json = r#"{"code":"XTS","number":963,"name":"Testing"}"#;
        let currency: Currency = serde_json::from_str(json).unwrap();
        assert_eq!(currency.exponent(), None);
    }
}
