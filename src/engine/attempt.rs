//! A single assignment attempt.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{
    Assignment, AssignmentKind, Override, Participant, Schedule, TargetDistribution,
};

use super::RandomSource;
use super::selection::WorkingSet;

/// Label for duty days without an override label.
pub const DEFAULT_DUTY_LABEL: &str = "routine duty";

/// Label for rest days without an override label.
pub const DEFAULT_REST_LABEL: &str = "rest";

/// Indexes overrides by date. Later entries for a date shadow earlier ones.
pub(crate) fn index_overrides(overrides: &[Override]) -> HashMap<NaiveDate, &Override> {
    overrides.iter().map(|ov| (ov.date, ov)).collect()
}

/// Produces one candidate schedule covering every duty day.
///
/// Days are processed in order. A rest override leaves the day without a
/// participant and charges nobody's quota. Every other day draws a
/// participant weighted by remaining quota, avoiding whoever was on duty
/// the previous calendar date when anyone else still has quota. A duty
/// override only replaces the label.
///
/// Overrides for dates that are not in `duty_days` have no effect.
///
/// # Example
///
/// ```
/// use duty_rotation::config::RemainderPolicy;
/// use duty_rotation::engine::{target_distribution, try_schedule, SeededRandom};
/// use duty_rotation::models::{Override, Participant};
/// use chrono::{NaiveDate, Utc};
///
/// let roster = vec![Participant::new("a", "Ann"), Participant::new("b", "Ben")];
/// let days: Vec<NaiveDate> = (12..=16)
///     .map(|d| NaiveDate::from_ymd_opt(2026, 1, d).unwrap())
///     .collect();
/// let mut rng = SeededRandom::new(3);
/// let targets = target_distribution(&roster, 5, RemainderPolicy::Positional, &mut rng).unwrap();
/// let overrides = vec![Override::rest(days[2])];
///
/// let schedule = try_schedule(&days, &roster, &targets, &overrides, &mut rng, Utc::now());
/// assert_eq!(schedule.len(), 5);
/// assert_eq!(schedule.participant_on(days[2]), None);
/// ```
pub fn try_schedule<R: RandomSource + ?Sized>(
    duty_days: &[NaiveDate],
    roster: &[Participant],
    targets: &TargetDistribution,
    overrides: &[Override],
    rng: &mut R,
    assigned_at: DateTime<Utc>,
) -> Schedule {
    let overrides = index_overrides(overrides);
    let mut working_set = WorkingSet::new(roster, targets);
    let mut schedule = Schedule::new();

    for &date in duty_days {
        let forced = overrides.get(&date).copied();

        if let Some(ov) = forced.filter(|ov| ov.kind == AssignmentKind::Rest) {
            let label = ov.label.as_deref().unwrap_or(DEFAULT_REST_LABEL);
            schedule.insert(date, Assignment::rest(label, assigned_at));
            continue;
        }

        let previous = date
            .pred_opt()
            .and_then(|yesterday| schedule.participant_on(yesterday));
        let chosen = working_set.select(previous, rng);

        let label = forced
            .and_then(|ov| ov.label.as_deref())
            .unwrap_or(DEFAULT_DUTY_LABEL);
        schedule.insert(date, Assignment::duty(label, chosen.id.clone(), assigned_at));
    }

    schedule
}
