//! Range value objects built from amounts and percentages.

pub mod money_range;
pub mod percent;

pub use money_range::MoneyRange;
pub use percent::PercentRange;
