//! Assignment and override models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Whether a day is worked or taken off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentKind {
    /// Someone is on duty.
    Duty,
    /// Nobody is on duty.
    Rest,
}

/// The outcome for a single duty day.
///
/// `participant_id` is present exactly when `kind` is [`AssignmentKind::Duty`].
///
/// # Example
///
/// ```
/// use duty_rotation::models::{Assignment, AssignmentKind};
/// use chrono::Utc;
///
/// let duty = Assignment::duty("routine duty", "p1", Utc::now());
/// assert_eq!(duty.kind, AssignmentKind::Duty);
/// assert_eq!(duty.participant_id.as_deref(), Some("p1"));
///
/// let rest = Assignment::rest("rest", Utc::now());
/// assert!(rest.participant_id.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Duty or rest.
    pub kind: AssignmentKind,
    /// Free-form label, e.g. "routine duty" or an override's label.
    pub label: String,
    /// The participant on duty; absent on rest days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant_id: Option<String>,
    /// When the attempt that produced this assignment started.
    pub assigned_at: DateTime<Utc>,
}

impl Assignment {
    /// A duty assignment for `participant_id`.
    pub fn duty(
        label: impl Into<String>,
        participant_id: impl Into<String>,
        assigned_at: DateTime<Utc>,
    ) -> Self {
        Self {
            kind: AssignmentKind::Duty,
            label: label.into(),
            participant_id: Some(participant_id.into()),
            assigned_at,
        }
    }

    /// A participant-less rest assignment.
    pub fn rest(label: impl Into<String>, assigned_at: DateTime<Utc>) -> Self {
        Self {
            kind: AssignmentKind::Rest,
            label: label.into(),
            participant_id: None,
            assigned_at,
        }
    }

    /// Returns true for duty assignments.
    pub fn is_duty(&self) -> bool {
        self.kind == AssignmentKind::Duty
    }
}

/// A caller-supplied forced outcome for one date.
///
/// A rest override clears the day; a duty override still assigns someone
/// but replaces the default label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Override {
    /// The date this override applies to.
    pub date: NaiveDate,
    /// Forced kind for the date.
    pub kind: AssignmentKind,
    /// Label to use instead of the default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Override {
    /// A rest override with the default label.
    pub fn rest(date: NaiveDate) -> Self {
        Self {
            date,
            kind: AssignmentKind::Rest,
            label: None,
        }
    }

    /// A duty override carrying its own label.
    pub fn duty(date: NaiveDate, label: impl Into<String>) -> Self {
        Self {
            date,
            kind: AssignmentKind::Duty,
            label: Some(label.into()),
        }
    }

    /// Replaces the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
