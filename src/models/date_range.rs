//! Inclusive calendar date range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive range of calendar dates to schedule.
///
/// # Example
///
/// ```
/// use duty_rotation::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 3, 8).unwrap(),
/// );
/// assert_eq!(range.days().count(), 7);
/// assert_eq!(range.span_days(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First date of the range (inclusive).
    pub start: NaiveDate,
    /// Last date of the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range without validating it. See [`DateRange::validate`].
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Rejects ranges whose end precedes their start.
    ///
    /// An empty-but-valid range and a nonsensical range must stay
    /// distinguishable, so `end < start` is an error rather than zero days.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end < self.start {
            return Err(EngineError::invalid_input(
                "date_range",
                format!("end {} precedes start {}", self.end, self.start),
            ));
        }
        Ok(())
    }

    /// Number of calendar days covered, both ends inclusive. Zero or
    /// negative for a reversed range.
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Iterates every calendar date from `start` to `end` inclusive.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }
}
