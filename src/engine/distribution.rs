//! Target distribution calculation.
//!
//! Splits the duty-day count as evenly as possible across the roster.

use crate::config::RemainderPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{Participant, TargetDistribution};

use super::RandomSource;

/// Computes each participant's fair share of `duty_day_count`.
///
/// Every participant gets `duty_day_count / roster.len()`; the remainder
/// units go one each to participants chosen by `policy`. The result sums
/// to `duty_day_count` exactly and its counts differ by at most one.
///
/// [`RemainderPolicy::Positional`] consumes no randomness.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if the roster is empty.
///
/// # Example
///
/// ```
/// use duty_rotation::config::RemainderPolicy;
/// use duty_rotation::engine::{target_distribution, SeededRandom};
/// use duty_rotation::models::Participant;
///
/// let roster = vec![
///     Participant::new("a", "Ann"),
///     Participant::new("b", "Ben"),
///     Participant::new("c", "Cai"),
/// ];
/// let mut rng = SeededRandom::new(1);
/// let targets = target_distribution(&roster, 10, RemainderPolicy::Positional, &mut rng).unwrap();
/// assert_eq!(targets.get("a"), 4);
/// assert_eq!(targets.get("b"), 3);
/// assert_eq!(targets.get("c"), 3);
/// ```
pub fn target_distribution<R: RandomSource + ?Sized>(
    roster: &[Participant],
    duty_day_count: u32,
    policy: RemainderPolicy,
    rng: &mut R,
) -> EngineResult<TargetDistribution> {
    if roster.is_empty() {
        return Err(EngineError::invalid_input(
            "roster",
            "roster must not be empty",
        ));
    }

    let size = roster.len() as u32;
    let base = duty_day_count / size;
    let remainder = (duty_day_count % size) as usize;

    // Positions in roster order that receive the extra unit.
    let mut order: Vec<usize> = (0..roster.len()).collect();
    if policy == RemainderPolicy::Shuffled {
        for i in (1..order.len()).rev() {
            let j = rng.next_index(i + 1);
            order.swap(i, j);
        }
    }
    let mut extra = vec![false; roster.len()];
    for &position in order.iter().take(remainder) {
        extra[position] = true;
    }

    let targets = roster
        .iter()
        .zip(extra)
        .map(|(participant, gets_extra)| {
            (participant.id.clone(), base + u32::from(gets_extra))
        })
        .collect();

    Ok(TargetDistribution::new(targets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SeededRandom;
    use proptest::prelude::*;

    fn roster(size: usize) -> Vec<Participant> {
        (0..size)
            .map(|i| Participant::new(format!("p{}", i), format!("Person {}", i)))
            .collect()
    }

    #[test]
    fn test_empty_roster_is_invalid() {
        let mut rng = SeededRandom::new(0);
        let result = target_distribution(&[], 5, RemainderPolicy::Positional, &mut rng);
        match result {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "roster"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_positional_remainder_goes_to_first_participants() {
        let mut rng = SeededRandom::new(0);
        let targets =
            target_distribution(&roster(4), 10, RemainderPolicy::Positional, &mut rng).unwrap();
        let counts: Vec<u32> = targets.iter().map(|(_, t)| t).collect();
        assert_eq!(counts, vec![3, 3, 2, 2]);
    }

    #[test]
    fn test_even_split_has_no_remainder() {
        let mut rng = SeededRandom::new(0);
        let targets =
            target_distribution(&roster(3), 9, RemainderPolicy::Shuffled, &mut rng).unwrap();
        assert!(targets.iter().all(|(_, t)| t == 3));
    }

    #[test]
    fn test_fewer_days_than_participants() {
        let mut rng = SeededRandom::new(0);
        let targets =
            target_distribution(&roster(5), 2, RemainderPolicy::Positional, &mut rng).unwrap();
        let counts: Vec<u32> = targets.iter().map(|(_, t)| t).collect();
        assert_eq!(counts, vec![1, 1, 0, 0, 0]);
    }

    #[test]
    fn test_shuffled_remainder_is_reproducible() {
        let first = target_distribution(
            &roster(6),
            20,
            RemainderPolicy::Shuffled,
            &mut SeededRandom::new(99),
        )
        .unwrap();
        let second = target_distribution(
            &roster(6),
            20,
            RemainderPolicy::Shuffled,
            &mut SeededRandom::new(99),
        )
        .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_shuffled_remainder_moves_extra_units() {
        // 6 participants, 8 days: base 1, remainder 2. Positional would
        // always give the extra unit to p0 and p1.
        let roster = roster(6);
        let mut extra_beyond_front = [false; 6];
        for seed in 0..50 {
            let mut rng = SeededRandom::new(seed);
            let targets =
                target_distribution(&roster, 8, RemainderPolicy::Shuffled, &mut rng).unwrap();
            assert_eq!(targets.total(), 8);
            for (position, (_, target)) in targets.iter().enumerate() {
                if target == 2 && position >= 2 {
                    extra_beyond_front[position] = true;
                }
            }
        }
        assert!(
            extra_beyond_front[2..].iter().all(|&hit| hit),
            "positions 2..6 never got an extra unit: {:?}",
            extra_beyond_front
        );
    }

    #[test]
    fn test_targets_keep_roster_order() {
        let mut rng = SeededRandom::new(5);
        let targets =
            target_distribution(&roster(4), 7, RemainderPolicy::Shuffled, &mut rng).unwrap();
        let ids: Vec<&str> = targets.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["p0", "p1", "p2", "p3"]);
    }

    proptest! {
        #[test]
        fn prop_targets_sum_to_duty_days(
            size in 1usize..20,
            days in 0u32..400,
            shuffled in any::<bool>(),
            seed in any::<u64>(),
        ) {
            let policy = if shuffled { RemainderPolicy::Shuffled } else { RemainderPolicy::Positional };
            let mut rng = SeededRandom::new(seed);
            let targets = target_distribution(&roster(size), days, policy, &mut rng).unwrap();

            prop_assert_eq!(targets.total(), days);
            let max = targets.iter().map(|(_, t)| t).max().unwrap();
            let min = targets.iter().map(|(_, t)| t).min().unwrap();
            prop_assert!(max - min <= 1);
        }
    }
}
