//! Recurring holiday calendar.
//!
//! Holidays are keyed by month and day only, so every entry recurs each
//! calendar year. The calendar is built once and never mutated afterwards.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A (month, day) pair that recurs every year, written as `MM-DD`.
///
/// # Example
///
/// ```
/// use duty_rotation::models::MonthDay;
///
/// let labour_day: MonthDay = "05-01".parse().unwrap();
/// assert_eq!(labour_day.month(), 5);
/// assert_eq!(labour_day.day(), 1);
/// assert_eq!(labour_day.to_string(), "05-01");
/// assert!("02-30".parse::<MonthDay>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Creates a month-day, returning `None` if it never occurs in any year.
    ///
    /// 02-29 is accepted since it occurs in leap years.
    pub fn new(month: u32, day: u32) -> Option<Self> {
        // 2000 is a leap year, so every real month-day is representable.
        NaiveDate::from_ymd_opt(2000, month, day).map(|_| Self { month, day })
    }

    /// The month-day a concrete date falls on.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    /// Month, 1-12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of month, 1-31.
    pub fn day(&self) -> u32 {
        self.day
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidHoliday {
            value: s.to_string(),
        };
        let (month, day) = s.trim().split_once('-').ok_or_else(invalid)?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let day: u32 = day.parse().map_err(|_| invalid())?;
        Self::new(month, day).ok_or_else(invalid)
    }
}

impl TryFrom<String> for MonthDay {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthDay> for String {
    fn from(value: MonthDay) -> Self {
        value.to_string()
    }
}

/// An immutable set of recurring holidays.
///
/// A date whose month and day are in the calendar is never a duty day,
/// whatever its weekday and whatever overrides say.
///
/// # Example
///
/// ```
/// use duty_rotation::models::{HolidayCalendar, MonthDay};
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new([MonthDay::new(10, 1).unwrap()]);
/// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2026, 10, 1).unwrap()));
/// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2031, 10, 1).unwrap()));
/// assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2026, 10, 4).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayCalendar {
    days: BTreeSet<MonthDay>,
}

/// Built-in recurring holidays used when no calendar is configured.
const DEFAULT_HOLIDAYS: [(u32, u32); 9] = [
    (1, 1),
    (2, 14),
    (4, 5),
    (5, 1),
    (6, 14),
    (9, 21),
    (10, 1),
    (10, 2),
    (10, 3),
];

impl HolidayCalendar {
    /// Builds a calendar from month-days. Duplicates collapse.
    pub fn new(days: impl IntoIterator<Item = MonthDay>) -> Self {
        Self {
            days: days.into_iter().collect(),
        }
    }

    /// A calendar with no holidays.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in calendar: 01-01, 02-14, 04-05, 05-01, 06-14, 09-21,
    /// 10-01, 10-02 and 10-03.
    pub fn default_calendar() -> Self {
        Self::new(
            DEFAULT_HOLIDAYS
                .iter()
                .filter_map(|&(month, day)| MonthDay::new(month, day)),
        )
    }

    /// Returns true if `date` falls on a holiday in any year.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.days.contains(&MonthDay::of(date))
    }

    /// Iterates the holidays in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = &MonthDay> {
        self.days.iter()
    }

    /// Number of distinct holidays.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns true if the calendar has no holidays.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
