//! Schedule result models.
//!
//! This module contains the [`ScheduleResult`] returned by the engine and the
//! per-participant statistics that accompany it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Schedule;

/// Duty statistics for one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantStats {
    /// Display name copied from the roster.
    pub name: String,
    /// Number of duty-kind assignments.
    pub count: u32,
}

/// The outcome of a scheduling run.
///
/// Exactly one of `retries_used` (balanced) and `warning_message`
/// (unbalanced) is present.
///
/// # Example
///
/// ```
/// use duty_rotation::models::{Schedule, ScheduleResult};
/// use std::collections::BTreeMap;
///
/// let result = ScheduleResult::balanced(Schedule::new(), BTreeMap::new(), 1);
/// let json = serde_json::to_value(&result).unwrap();
/// assert_eq!(json["balanced"], true);
/// assert_eq!(json["retries_used"], 1);
/// assert!(json.get("warning_message").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// The chosen schedule.
    pub schedule: Schedule,
    /// Per-participant statistics keyed by participant id.
    pub stats: BTreeMap<String, ParticipantStats>,
    /// True when the schedule hits every participant's target exactly.
    pub balanced: bool,
    /// Worst-case gap between actual and target counts; 0 when balanced.
    pub deviation: u32,
    /// Attempt number that produced a balanced schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retries_used: Option<u32>,
    /// Why the result is unbalanced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_message: Option<String>,
}

impl ScheduleResult {
    /// A perfectly balanced result found on attempt `retries_used`.
    pub fn balanced(
        schedule: Schedule,
        stats: BTreeMap<String, ParticipantStats>,
        retries_used: u32,
    ) -> Self {
        Self {
            schedule,
            stats,
            balanced: true,
            deviation: 0,
            retries_used: Some(retries_used),
            warning_message: None,
        }
    }

    /// The best unbalanced result after `attempts` attempts.
    pub fn best_effort(
        schedule: Schedule,
        stats: BTreeMap<String, ParticipantStats>,
        attempts: u32,
        deviation: u32,
    ) -> Self {
        Self {
            schedule,
            stats,
            balanced: false,
            deviation,
            retries_used: None,
            warning_message: Some(format!(
                "after {} attempts, best achievable deviation is {}",
                attempts, deviation
            )),
        }
    }

    /// Sum of all participants' duty counts.
    pub fn total_assigned(&self) -> u32 {
        self.stats.values().map(|s| s.count).sum()
    }
}
