//! Currency catalog and money value types for the PayPal REST client.
//!
//! Every PayPal request and response body that carries money goes through the
//! types in this crate. There is no I/O here.
//!
//! # Modules
//!
//! - `currency` - ISO 4217 catalog and the `Currency` type
//! - `amount` - Validated amounts with banker's rounding on encode
//! - `range` - Money and percentage ranges
//! - `error` - Money error taxonomy

pub mod amount;
pub mod currency;
pub mod error;
pub mod range;

pub use amount::{Amount, AmountKeys, CurrencyCodeKeys, CurrencyKeys, MonetaryAmount, Money};
pub use currency::Currency;
pub use error::{MoneyError, MoneyResult};
pub use range::{MoneyRange, PercentRange};
