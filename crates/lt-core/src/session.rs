//! The session record: one scheduled occurrence of an activity.

use serde::{Deserialize, Serialize};

use crate::types::{Day, Venue};

/// One scheduled occurrence of an activity at a venue.
///
/// Sessions are supplied as an already-complete collection and are never
/// created, mutated, or deleted by the engine. Derived attributes (category,
/// pool membership, start hour) are recomputed on demand from the text fields
/// rather than stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// The leisure centre offering the session.
    pub venue: Venue,

    /// Weekday the session runs on.
    pub day: Day,

    /// Human-written time range, `"H:MM - H:MM"` or `"H:MM-H:MM"`, 24-hour.
    pub time: String,

    /// Free-text activity label (not a controlled vocabulary).
    pub activity: String,

    /// Free-text sub-venue label (e.g. "Main Pool", "Dance Studio"); may be empty.
    #[serde(default)]
    pub location: String,

    /// Whether the session is streamed rather than held in person.
    #[serde(rename = "virtual", default)]
    pub is_virtual: bool,
}

impl Session {
    /// Convenience constructor for building in-person sessions in code.
    #[must_use]
    pub fn new(
        venue: Venue,
        day: Day,
        time: impl Into<String>,
        activity: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            venue,
            day,
            time: time.into(),
            activity: activity.into(),
            location: location.into(),
            is_virtual: false,
        }
    }
}
