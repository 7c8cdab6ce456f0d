//! ISO 4217 currencies and the process-wide catalog.

pub mod catalog;
mod table;
pub mod types;

pub use catalog::{all, lookup};
pub use types::Currency;
pub(crate) use types::CurrencyRepr;
