//! Duty-day derivation.
//!
//! Decides which calendar dates in a range need someone on duty, based on
//! weekday, weekend inclusion flags and the injected holiday calendar.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{DateRange, HolidayCalendar};

/// Returns true if `date` is a duty day.
///
/// Holidays are never duty days. Otherwise weekdays always are, and
/// Saturdays and Sundays only when their flag is set.
///
/// # Example
///
/// ```
/// use duty_rotation::engine::is_duty_day;
/// use duty_rotation::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::default_calendar();
/// // 2026-01-17 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// assert!(!is_duty_day(saturday, false, false, &calendar));
/// assert!(is_duty_day(saturday, true, false, &calendar));
///
/// // 2026-01-01 is a Thursday, but a holiday
/// let new_year = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// assert!(!is_duty_day(new_year, true, true, &calendar));
/// ```
pub fn is_duty_day(
    date: NaiveDate,
    include_saturday: bool,
    include_sunday: bool,
    calendar: &HolidayCalendar,
) -> bool {
    if calendar.is_holiday(date) {
        return false;
    }
    match date.weekday() {
        Weekday::Sat => include_saturday,
        Weekday::Sun => include_sunday,
        _ => true,
    }
}

/// Lists the duty days in `range`, ascending.
///
/// A range with no duty days yields an empty vector; that is not an error.
pub fn duty_days(
    range: &DateRange,
    include_saturday: bool,
    include_sunday: bool,
    calendar: &HolidayCalendar,
) -> Vec<NaiveDate> {
    range
        .days()
        .filter(|&date| is_duty_day(date, include_saturday, include_sunday, calendar))
        .collect()
}
