//! Participant model.

use serde::{Deserialize, Serialize};

/// A member of the duty roster.
///
/// Identity is by `id`; `name` is carried through for display and statistics.
///
/// # Example
///
/// ```
/// use duty_rotation::models::Participant;
///
/// let alice = Participant::new("p1", "Alice");
/// assert_eq!(alice.id, "p1");
/// assert_eq!(alice.name, "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    /// Opaque identifier, unique within a roster.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Participant {
    /// Creates a participant from an id and a display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
