//! Request types for the Duty Rotation Engine API.
//!
//! This module defines the JSON request structure for the `/schedule` endpoint.

use serde::{Deserialize, Serialize};

use crate::config::RotationConfig;
use crate::models::{DateRange, Participant};

/// Request body for the `/schedule` endpoint.
///
/// # Example
///
/// ```
/// use duty_rotation::api::ScheduleRequest;
///
/// let request: ScheduleRequest = serde_json::from_str(r#"{
///     "roster": [{"id": "a", "name": "Ann"}, {"id": "b", "name": "Ben"}],
///     "date_range": {"start": "2026-01-12", "end": "2026-01-23"},
///     "seed": 7
/// }"#).unwrap();
///
/// assert_eq!(request.roster.len(), 2);
/// assert!(request.config.is_none());
/// assert_eq!(request.seed, Some(7));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Participants eligible for duty, in roster order.
    pub roster: Vec<Participant>,
    /// Inclusive range of dates to schedule.
    pub date_range: DateRange,
    /// Per-request options. When absent, the server's configured defaults
    /// apply; when present, omitted fields take their built-in defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<RotationConfig>,
    /// Seed for a reproducible schedule. Entropy is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}
