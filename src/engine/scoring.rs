//! Deviation scoring and per-participant statistics.

use std::collections::{BTreeMap, HashMap};

use crate::models::{Participant, ParticipantStats, Schedule, TargetDistribution};

fn duty_counts(schedule: &Schedule) -> HashMap<&str, u32> {
    let mut counts = HashMap::new();
    for (_, assignment) in schedule.iter() {
        if let Some(id) = assignment.participant_id.as_deref().filter(|_| assignment.is_duty()) {
            *counts.entry(id).or_insert(0) += 1;
        }
    }
    counts
}

/// Worst-case gap between any participant's duty count and their target.
///
/// 0 means the schedule is perfectly balanced.
///
/// # Example
///
/// ```
/// use duty_rotation::config::RemainderPolicy;
/// use duty_rotation::engine::{deviation, target_distribution, SeededRandom};
/// use duty_rotation::models::{Participant, Schedule};
///
/// let roster = vec![Participant::new("a", "Ann")];
/// let targets = target_distribution(&roster, 2, RemainderPolicy::Positional, &mut SeededRandom::new(0)).unwrap();
/// // Nobody scheduled yet: Ann is 2 short.
/// assert_eq!(deviation(&Schedule::new(), &targets), 2);
/// ```
pub fn deviation(schedule: &Schedule, targets: &TargetDistribution) -> u32 {
    let actual = duty_counts(schedule);
    targets
        .iter()
        .map(|(id, target)| actual.get(id).copied().unwrap_or(0).abs_diff(target))
        .max()
        .unwrap_or(0)
}

/// Duty counts for every roster participant, including those with none.
pub fn statistics(
    schedule: &Schedule,
    roster: &[Participant],
) -> BTreeMap<String, ParticipantStats> {
    let actual = duty_counts(schedule);
    roster
        .iter()
        .map(|participant| {
            (
                participant.id.clone(),
                ParticipantStats {
                    name: participant.name.clone(),
                    count: actual.get(participant.id.as_str()).copied().unwrap_or(0),
                },
            )
        })
        .collect()
}
