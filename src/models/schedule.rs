//! The schedule produced by the engine.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::{Assignment, AssignmentKind};

/// One assignment per duty day, iterated in chronological order.
///
/// Serializes as a JSON object keyed by ISO date (`"2026-01-13"`), and
/// deserializes back to an identical schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    entries: BTreeMap<NaiveDate, Assignment>,
}

/// A flattened schedule entry for tabular consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow<'a> {
    /// The duty day.
    pub date: NaiveDate,
    /// Its weekday.
    pub weekday: Weekday,
    /// What was decided for it.
    pub assignment: &'a Assignment,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, date: NaiveDate, assignment: Assignment) {
        self.entries.insert(date, assignment);
    }

    /// The assignment for `date`, if it is a duty day.
    pub fn get(&self, date: NaiveDate) -> Option<&Assignment> {
        self.entries.get(&date)
    }

    /// The participant on duty on `date`, if any.
    pub fn participant_on(&self, date: NaiveDate) -> Option<&str> {
        self.entries
            .get(&date)
            .and_then(|a| a.participant_id.as_deref())
    }

    /// Iterates `(date, assignment)` in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &Assignment)> {
        self.entries.iter().map(|(date, a)| (*date, a))
    }

    /// The scheduled dates in chronological order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.entries.keys().copied()
    }

    /// Number of scheduled days.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of duty-kind assignments.
    pub fn duty_count(&self) -> usize {
        self.entries.values().filter(|a| a.is_duty()).count()
    }

    /// Number of rest-kind assignments.
    pub fn rest_count(&self) -> usize {
        self.entries
            .values()
            .filter(|a| a.kind == AssignmentKind::Rest)
            .count()
    }

    /// The days one participant is on duty, in chronological order.
    ///
    /// # Example
    ///
    /// ```
    /// use duty_rotation::engine::{generate_schedule, SeededRandom};
    /// use duty_rotation::config::RotationConfig;
    /// use duty_rotation::models::{DateRange, HolidayCalendar, Participant};
    /// use chrono::NaiveDate;
    ///
    /// let roster = vec![Participant::new("a", "Ann"), Participant::new("b", "Ben")];
    /// let range = DateRange::new(
    ///     NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
    ///     NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
    /// );
    /// let mut rng = SeededRandom::new(7);
    /// let result = generate_schedule(
    ///     &roster, range, &RotationConfig::default(), &HolidayCalendar::empty(), &mut rng,
    /// ).unwrap();
    ///
    /// let ann_days = result.schedule.for_participant("a").count();
    /// assert_eq!(ann_days as u32, result.stats["a"].count);
    /// ```
    pub fn for_participant<'a>(
        &'a self,
        participant_id: &'a str,
    ) -> impl Iterator<Item = (NaiveDate, &'a Assignment)> + 'a {
        self.iter()
            .filter(move |(_, a)| a.participant_id.as_deref() == Some(participant_id))
    }

    /// Flattens the schedule into rows, one per day, in chronological order.
    pub fn rows(&self) -> Vec<ScheduleRow<'_>> {
        self.iter()
            .map(|(date, assignment)| ScheduleRow {
                date,
                weekday: date.weekday(),
                assignment,
            })
            .collect()
    }
}
