//! Inclusive percentage interval.

use std::ops::{Bound, RangeBounds, RangeInclusive};

use serde::{Deserialize, Serialize};

use crate::error::MoneyError;

const MINIMUM_FLOOR: i64 = 0;
const MINIMUM_CEILING: i64 = 99;
const MAXIMUM_FLOOR: i64 = 1;
const MAXIMUM_CEILING: i64 = 100;

/// A closed interval of whole percentages, e.g. a share-of-revenue band.
///
/// `minimum` lies in `0..=99`, `maximum` in `1..=100`, and
/// `minimum <= maximum`. Behaves as the collection of integers it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPercentRange")]
pub struct PercentRange {
    minimum: u8,
    maximum: u8,
}

#[derive(Deserialize)]
struct RawPercentRange {
    minimum: i64,
    maximum: i64,
}

impl TryFrom<RawPercentRange> for PercentRange {
    type Error = MoneyError;

    fn try_from(raw: RawPercentRange) -> Result<Self, Self::Error> {
        Self::checked(raw.minimum, raw.maximum)
    }
}

fn check_bound(field: &'static str, value: i64, min: i64, max: i64) -> Result<u8, MoneyError> {
    match u8::try_from(value) {
        Ok(bound) if (min..=max).contains(&value) => Ok(bound),
        _ => {
            tracing::debug!(field, value, min, max, "percent bound out of range");
            Err(MoneyError::RangeBoundViolation {
                field,
                value,
                min,
                max,
            })
        }
    }
}

impl PercentRange {
    /// Creates a range from its two bounds.
    ///
    /// # Errors
    ///
    /// Returns `RangeBoundViolation` if a bound is outside its domain or the
    /// bounds are inverted.
    pub fn new(minimum: u8, maximum: u8) -> Result<Self, MoneyError> {
        Self::checked(i64::from(minimum), i64::from(maximum))
    }

    /// Creates a range from native range syntax.
    ///
    /// An unbounded start becomes 0 and an unbounded end becomes 100; exclusive
    /// bounds are converted to their inclusive neighbours.
    ///
    /// # Errors
    ///
    /// Same as [`PercentRange::new`].
    pub fn from_range<R: RangeBounds<u8>>(range: R) -> Result<Self, MoneyError> {
        let minimum = match range.start_bound() {
            Bound::Included(&start) => i64::from(start),
            Bound::Excluded(&start) => i64::from(start) + 1,
            Bound::Unbounded => MINIMUM_FLOOR,
        };
        let maximum = match range.end_bound() {
            Bound::Included(&end) => i64::from(end),
            Bound::Excluded(&end) => i64::from(end) - 1,
            Bound::Unbounded => MAXIMUM_CEILING,
        };
        Self::checked(minimum, maximum)
    }

    fn checked(minimum: i64, maximum: i64) -> Result<Self, MoneyError> {
        let maximum = check_bound("maximum", maximum, MAXIMUM_FLOOR, MAXIMUM_CEILING)?;
        let minimum = check_bound(
            "minimum",
            minimum,
            MINIMUM_FLOOR,
            MINIMUM_CEILING.min(i64::from(maximum)),
        )?;
        Ok(Self { minimum, maximum })
    }

    /// Lower bound, inclusive.
    #[must_use]
    pub const fn minimum(&self) -> u8 {
        self.minimum
    }

    /// Upper bound, inclusive.
    #[must_use]
    pub const fn maximum(&self) -> u8 {
        self.maximum
    }

    /// Replaces the lower bound, keeping the old one on error.
    ///
    /// # Errors
    ///
    /// Returns `RangeBoundViolation` if `minimum` is outside `0..=99` or above
    /// the current maximum.
    pub fn set_minimum(&mut self, minimum: u8) -> Result<(), MoneyError> {
        *self = Self::new(minimum, self.maximum)?;
        Ok(())
    }

    /// Replaces the upper bound, keeping the old one on error.
    ///
    /// # Errors
    ///
    /// Returns `RangeBoundViolation` if `maximum` is outside `1..=100` or below
    /// the current minimum.
    pub fn set_maximum(&mut self, maximum: u8) -> Result<(), MoneyError> {
        *self = Self::new(self.minimum, maximum)?;
        Ok(())
    }

    /// Returns true if `value` lies within the bounds.
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        (i32::from(self.minimum)..=i32::from(self.maximum)).contains(&value)
    }

    /// Number of integers in the range.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.maximum - self.minimum) + 1
    }

    /// Always false: a valid range holds at least one integer.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// The integer at `index` positions past the minimum.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        let offset = u8::try_from(index).ok()?;
        self.minimum
            .checked_add(offset)
            .filter(|value| *value <= self.maximum)
    }

    /// The next integer in the range after `value`.
    #[must_use]
    pub fn successor(&self, value: u8) -> Option<u8> {
        (value >= self.minimum && value < self.maximum).then(|| value + 1)
    }

    /// The integer in the range before `value`.
    #[must_use]
    pub fn predecessor(&self, value: u8) -> Option<u8> {
        (value > self.minimum && value <= self.maximum).then(|| value - 1)
    }

    /// Iterates from minimum to maximum.
    #[must_use]
    pub fn iter(&self) -> RangeInclusive<u8> {
        self.minimum..=self.maximum
    }
}

impl From<PercentRange> for RangeInclusive<u8> {
    fn from(range: PercentRange) -> Self {
        range.iter()
    }
}

impl IntoIterator for PercentRange {
    type Item = u8;
    type IntoIter = RangeInclusive<u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &PercentRange {
    type Item = u8;
    type IntoIter = RangeInclusive<u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
