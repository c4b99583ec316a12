//! Top-level retry loop.
//!
//! Runs independent assignment attempts until one is perfectly balanced or
//! the retry budget runs out, then returns the best attempt seen.

use std::collections::HashSet;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::config::RotationConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{DateRange, HolidayCalendar, Participant, Schedule, ScheduleResult};

use super::attempt::index_overrides;
use super::{RandomSource, deviation, duty_days, statistics, target_distribution, try_schedule};

/// Generates a duty schedule for `roster` over `range`.
///
/// Validation happens before any work: the roster must be non-empty, ids
/// must be unique, `range.end` must not precede `range.start`, and the
/// retry budget must be at least 1.
///
/// Each attempt is scored by [`deviation`]. The first attempt scoring 0 is
/// returned at once with `balanced = true`. Otherwise the lowest-scoring
/// attempt (earliest on ties) is returned with `balanced = false` and a
/// warning naming the budget and the best deviation.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] for any of the validation failures
/// above. An unbalanced schedule is not an error.
///
/// # Example
///
/// ```
/// use duty_rotation::config::RotationConfig;
/// use duty_rotation::engine::{generate_schedule, SeededRandom};
/// use duty_rotation::models::{DateRange, HolidayCalendar, Participant};
/// use chrono::NaiveDate;
///
/// let roster = vec![Participant::new("solo", "Sam")];
/// // Mon 2026-01-12 .. Fri 2026-01-16
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
/// );
/// let result = generate_schedule(
///     &roster,
///     range,
///     &RotationConfig::default(),
///     &HolidayCalendar::empty(),
///     &mut SeededRandom::new(1),
/// )
/// .unwrap();
///
/// assert!(result.balanced);
/// assert_eq!(result.retries_used, Some(1));
/// assert_eq!(result.stats["solo"].count, 5);
/// ```
pub fn generate_schedule<R: RandomSource + ?Sized>(
    roster: &[Participant],
    range: DateRange,
    config: &RotationConfig,
    calendar: &HolidayCalendar,
    rng: &mut R,
) -> EngineResult<ScheduleResult> {
    validate(roster, &range, config)?;
    let start_time = Instant::now();

    let days = duty_days(
        &range,
        config.include_saturday,
        config.include_sunday,
        calendar,
    );
    let targets = target_distribution(roster, days.len() as u32, config.remainder_policy, rng)?;

    let ignored = index_overrides(&config.overrides)
        .keys()
        .filter(|date| days.binary_search(date).is_err())
        .count();
    if ignored > 0 {
        debug!(ignored, "overrides on non-duty dates have no effect");
    }

    let mut best_schedule = Schedule::new();
    let mut best_deviation = u32::MAX;

    for attempt in 1..=config.retry_budget {
        let schedule = try_schedule(
            &days,
            roster,
            &targets,
            &config.overrides,
            rng,
            Utc::now(),
        );
        let score = deviation(&schedule, &targets);
        debug!(attempt, deviation = score, "attempt scored");

        if score == 0 {
            info!(
                participants = roster.len(),
                duty_days = days.len(),
                attempts = attempt,
                duration_us = start_time.elapsed().as_micros() as u64,
                "balanced schedule found"
            );
            let stats = statistics(&schedule, roster);
            return Ok(ScheduleResult::balanced(schedule, stats, attempt));
        }

        if score < best_deviation {
            best_deviation = score;
            best_schedule = schedule;
        }
    }

    warn!(
        participants = roster.len(),
        duty_days = days.len(),
        attempts = config.retry_budget,
        deviation = best_deviation,
        duration_us = start_time.elapsed().as_micros() as u64,
        "no balanced schedule within retry budget"
    );
    let stats = statistics(&best_schedule, roster);
    Ok(ScheduleResult::best_effort(
        best_schedule,
        stats,
        config.retry_budget,
        best_deviation,
    ))
}

fn validate(
    roster: &[Participant],
    range: &DateRange,
    config: &RotationConfig,
) -> EngineResult<()> {
    if roster.is_empty() {
        return Err(EngineError::invalid_input(
            "roster",
            "roster must not be empty",
        ));
    }

    let mut seen = HashSet::new();
    if let Some(duplicate) = roster.iter().find(|p| !seen.insert(p.id.as_str())) {
        return Err(EngineError::invalid_input(
            "roster",
            format!("duplicate participant id '{}'", duplicate.id),
        ));
    }

    range.validate()?;

    if config.retry_budget == 0 {
        return Err(EngineError::invalid_input(
            "retry_budget",
            "retry budget must be at least 1",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SeededRandom;
    use crate::engine::random::FixedSequence;
    use crate::models::{AssignmentKind, Override};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::new(make_date(start), make_date(end))
    }

    fn roster(size: usize) -> Vec<Participant> {
        (0..size)
            .map(|i| Participant::new(format!("p{}", i), format!("Person {}", i)))
            .collect()
    }

    /// Mon 2026-01-12 .. Fri 2026-01-23: ten weekdays, no default holidays.
    fn ten_weekdays() -> DateRange {
        range("2026-01-12", "2026-01-23")
    }

    #[test]
    fn test_empty_roster_fails_before_range_check() {
        // The range is also invalid; the roster error must win.
        let result = generate_schedule(
            &[],
            range("2026-01-20", "2026-01-10"),
            &RotationConfig::default(),
            &HolidayCalendar::empty(),
            &mut SeededRandom::new(0),
        );
        match result {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "roster"),
            other => panic!("Expected roster InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_reversed_range_is_invalid() {
        let result = generate_schedule(
            &roster(2),
            range("2026-01-20", "2026-01-10"),
            &RotationConfig::default(),
            &HolidayCalendar::empty(),
            &mut SeededRandom::new(0),
        );
        match result {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "date_range"),
            other => panic!("Expected date_range InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_retry_budget_is_invalid() {
        let config = RotationConfig {
            retry_budget: 0,
            ..RotationConfig::default()
        };
        let result = generate_schedule(
            &roster(2),
            ten_weekdays(),
            &config,
            &HolidayCalendar::empty(),
            &mut SeededRandom::new(0),
        );
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn test_duplicate_ids_are_invalid() {
        let roster = vec![Participant::new("a", "Ann"), Participant::new("a", "Another Ann")];
        let result = generate_schedule(
            &roster,
            ten_weekdays(),
            &RotationConfig::default(),
            &HolidayCalendar::empty(),
            &mut SeededRandom::new(0),
        );
        match result {
            Err(EngineError::InvalidInput { message, .. }) => assert!(message.contains("'a'")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_range_without_duty_days_is_balanced_and_empty() {
        // A weekend only.
        let result = generate_schedule(
            &roster(3),
            range("2026-01-17", "2026-01-18"),
            &RotationConfig::default(),
            &HolidayCalendar::empty(),
            &mut SeededRandom::new(0),
        )
        .unwrap();
        assert!(result.schedule.is_empty());
        assert!(result.balanced);
        assert_eq!(result.retries_used, Some(1));
        assert!(result.stats.values().all(|s| s.count == 0));
    }

    #[test]
    fn test_single_participant_covers_every_day() {
        let result = generate_schedule(
            &roster(1),
            range("2026-01-12", "2026-01-16"),
            &RotationConfig::default(),
            &HolidayCalendar::empty(),
            &mut SeededRandom::new(0),
        )
        .unwrap();
        assert_eq!(result.schedule.len(), 5);
        assert!(
            result
                .schedule
                .iter()
                .all(|(_, a)| a.participant_id.as_deref() == Some("p0"))
        );
        assert_eq!(result.stats["p0"].count, 5);
        assert!(result.balanced);
    }

    #[test]
    fn test_three_over_ten_weekdays_converges() {
        let result = generate_schedule(
            &roster(3),
            ten_weekdays(),
            &RotationConfig::default(),
            &HolidayCalendar::empty(),
            &mut SeededRandom::new(2024),
        )
        .unwrap();

        assert_eq!(result.schedule.len(), 10);
        if result.balanced {
            let mut counts: Vec<u32> = result.stats.values().map(|s| s.count).collect();
            counts.sort_unstable();
            assert_eq!(counts, vec![3, 3, 4]);
            assert!(result.warning_message.is_none());
        } else {
            assert!(!result.warning_message.unwrap_or_default().is_empty());
        }
    }

    #[test]
    fn test_same_seed_same_schedule() {
        let run = |seed| {
            generate_schedule(
                &roster(4),
                range("2026-03-02", "2026-04-30"),
                &RotationConfig {
                    include_saturday: true,
                    ..RotationConfig::default()
                },
                &HolidayCalendar::default_calendar(),
                &mut SeededRandom::new(seed),
            )
            .unwrap()
        };
        let first = run(77);
        let second = run(77);
        let ids = |r: &ScheduleResult| -> Vec<Option<String>> {
            r.schedule.iter().map(|(_, a)| a.participant_id.clone()).collect()
        };
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(first.stats, second.stats);
    }

    #[test]
    fn test_holidays_never_scheduled() {
        let result = generate_schedule(
            &roster(3),
            range("2026-09-28", "2026-10-09"),
            &RotationConfig {
                include_saturday: true,
                include_sunday: true,
                ..RotationConfig::default()
            },
            &HolidayCalendar::default_calendar(),
            &mut SeededRandom::new(9),
        )
        .unwrap();
        for holiday in ["2026-10-01", "2026-10-02", "2026-10-03"] {
            assert!(result.schedule.get(make_date(holiday)).is_none());
        }
        assert_eq!(result.schedule.len(), 9);
    }

    #[test]
    fn test_rest_override_makes_balance_impossible() {
        // Three weekdays, three people, one forced rest: someone always misses
        // their single target day.
        let config = RotationConfig {
            overrides: vec![Override::rest(make_date("2026-01-13"))],
            retry_budget: 4,
            ..RotationConfig::default()
        };
        let result = generate_schedule(
            &roster(3),
            range("2026-01-12", "2026-01-14"),
            &config,
            &HolidayCalendar::empty(),
            &mut SeededRandom::new(1),
        )
        .unwrap();

        assert!(!result.balanced);
        assert_eq!(result.deviation, 1);
        assert_eq!(result.retries_used, None);
        assert_eq!(
            result.warning_message.as_deref(),
            Some("after 4 attempts, best achievable deviation is 1")
        );
        let rest = result.schedule.get(make_date("2026-01-13")).unwrap();
        assert_eq!(rest.kind, AssignmentKind::Rest);
        assert_eq!(result.total_assigned(), 2);
    }

    #[test]
    fn test_stops_at_first_balanced_attempt() {
        // Two people, two days: the no-repeat rule always balances on attempt 1.
        let result = generate_schedule(
            &roster(2),
            range("2026-01-12", "2026-01-13"),
            &RotationConfig {
                retry_budget: 50,
                ..RotationConfig::default()
            },
            &HolidayCalendar::empty(),
            &mut FixedSequence::new(vec![0.3, 0.6]),
        )
        .unwrap();
        assert!(result.balanced);
        assert_eq!(result.retries_used, Some(1));
    }

    fn arb_config() -> impl Strategy<Value = (usize, i64, bool, bool, u64)> {
        (1usize..6, 0i64..45, any::<bool>(), any::<bool>(), any::<u64>())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_schedule_invariants((size, span, sat, sun, seed) in arb_config()) {
            let start = make_date("2026-09-20");
            let range = DateRange::new(start, start + chrono::Duration::days(span));
            let calendar = HolidayCalendar::default_calendar();
            let config = RotationConfig {
                include_saturday: sat,
                include_sunday: sun,
                retry_budget: 3,
                ..RotationConfig::default()
            };
            let roster = roster(size);
            let result = generate_schedule(
                &roster, range, &config, &calendar, &mut SeededRandom::new(seed),
            ).unwrap();

            // Completeness: exactly the duty days, each once.
            let expected = duty_days(&range, sat, sun, &calendar);
            let actual: Vec<NaiveDate> = result.schedule.dates().collect();
            prop_assert_eq!(&actual, &expected);

            // Statistics conservation.
            prop_assert_eq!(result.total_assigned() as usize, result.schedule.duty_count());
            prop_assert_eq!(result.stats.len(), size);

            // Exactly one of retries_used / warning_message.
            prop_assert_eq!(result.balanced, result.retries_used.is_some());
            prop_assert_eq!(result.balanced, result.warning_message.is_none());
        }

        #[test]
        fn prop_repeats_only_when_forced(size in 2usize..6, span in 1i64..40, seed in any::<u64>()) {
            // Weekends included, so duty days are consecutive calendar days.
            let start = make_date("2026-01-05");
            let range = DateRange::new(start, start + chrono::Duration::days(span));
            let config = RotationConfig {
                include_saturday: true,
                include_sunday: true,
                retry_budget: 1,
                ..RotationConfig::default()
            };
            let roster = roster(size);
            let result = generate_schedule(
                &roster, range, &config, &HolidayCalendar::empty(), &mut SeededRandom::new(seed),
            ).unwrap();

            let days = duty_days(&range, true, true, &HolidayCalendar::empty());
            let targets = target_distribution(
                &roster, days.len() as u32, config.remainder_policy, &mut SeededRandom::new(0),
            ).unwrap();

            let mut assigned: std::collections::HashMap<String, u32> = Default::default();
            let mut previous: Option<String> = None;
            for (_, assignment) in result.schedule.iter() {
                let who = assignment.participant_id.clone().unwrap();
                if previous.as_deref() == Some(who.as_str()) {
                    // Everyone else must have been out of quota.
                    for (id, target) in targets.iter() {
                        if id != who {
                            prop_assert_eq!(assigned.get(id).copied().unwrap_or(0), target);
                        }
                    }
                }
                *assigned.entry(who.clone()).or_insert(0) += 1;
                previous = Some(who);
            }
        }
    }
}
