//! Fair-share target per participant.

use serde::Serialize;

/// How many duty days each participant should receive, in roster order.
///
/// Built by [`crate::engine::target_distribution`], which guarantees the
/// counts sum to the number of duty days and differ by at most one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetDistribution {
    targets: Vec<(String, u32)>,
}

impl TargetDistribution {
    pub(crate) fn new(targets: Vec<(String, u32)>) -> Self {
        Self { targets }
    }

    /// The target for `participant_id`, or 0 if it is not in the roster.
    pub fn get(&self, participant_id: &str) -> u32 {
        self.targets
            .iter()
            .find(|(id, _)| id == participant_id)
            .map_or(0, |(_, target)| *target)
    }

    /// Iterates `(participant id, target)` in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.targets.iter().map(|(id, target)| (id.as_str(), *target))
    }

    /// Sum of all targets.
    pub fn total(&self) -> u32 {
        self.targets.iter().map(|(_, target)| target).sum()
    }

    /// Number of participants.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns true if there are no participants.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
