//! Catalog deserialization with the silent-drop policy.
//!
//! The wire format is a JSON array of session records. Structurally invalid
//! JSON is a hard error; a record whose venue or day is unrecognized is
//! dropped with a warning instead, so one bad row never takes down the whole
//! timetable.

use serde::Deserialize;
use thiserror::Error;

use crate::category::uncategorized_activities;
use crate::session::Session;
use crate::types::{Day, Venue};

/// Errors loading a session catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog text was not a valid JSON array of records.
    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A catalog record before venue/day validation.
#[derive(Debug, Deserialize)]
struct RawRecord {
    venue: String,
    day: String,
    #[serde(default)]
    time: String,
    #[serde(default)]
    activity: String,
    #[serde(default)]
    location: String,
    #[serde(rename = "virtual", default)]
    is_virtual: bool,
}

/// Parses a catalog JSON document into validated sessions.
///
/// Records with an unrecognized venue or day are skipped with a
/// `tracing::warn!`; activity labels the classifier cannot place are logged
/// at debug level for the audit surface.
pub fn parse_catalog(text: &str) -> Result<Vec<Session>, CatalogError> {
    let records: Vec<RawRecord> = serde_json::from_str(text)?;

    let mut sessions = Vec::with_capacity(records.len());
    for record in records {
        let venue: Venue = match record.venue.parse() {
            Ok(venue) => venue,
            Err(_) => {
                tracing::warn!(venue = %record.venue, activity = %record.activity, "dropping record with unknown venue");
                continue;
            }
        };
        let day: Day = match record.day.parse() {
            Ok(day) => day,
            Err(_) => {
                tracing::warn!(day = %record.day, activity = %record.activity, "dropping record with unknown day");
                continue;
            }
        };
        sessions.push(Session {
            venue,
            day,
            time: record.time,
            activity: record.activity,
            location: record.location,
            is_virtual: record.is_virtual,
        });
    }

    for label in uncategorized_activities(&sessions) {
        tracing::debug!(activity = %label, "activity did not match any category rule");
    }

    Ok(sessions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_catalog() {
        let text = r#"[
            {"venue": "Riverside", "day": "Monday", "time": "6:35 - 7:05",
             "activity": "Aqua Fit", "location": "Main Pool", "virtual": false},
            {"venue": "Stanmore", "day": "Friday", "time": "18:00-19:00",
             "activity": "Yoga", "location": "Studio 1", "virtual": true}
        ]"#;
        let sessions = parse_catalog(text).unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].venue, Venue::Riverside);
        assert!(sessions[1].is_virtual);
    }

    #[test]
    fn unknown_venue_or_day_is_dropped_not_fatal() {
        let text = r#"[
            {"venue": "Atlantis", "day": "Monday", "time": "9:00 - 10:00",
             "activity": "Zumba", "location": ""},
            {"venue": "Riverside", "day": "Funday", "time": "9:00 - 10:00",
             "activity": "Zumba", "location": ""},
            {"venue": "Riverside", "day": "Monday", "time": "9:00 - 10:00",
             "activity": "Zumba", "location": ""}
        ]"#;
        let sessions = parse_catalog(text).unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].day, Day::Monday);
    }

    #[test]
    fn empty_catalog_is_not_an_error() {
        assert!(parse_catalog("[]").unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_catalog("not json").is_err());
        assert!(parse_catalog(r#"{"venue": "Riverside"}"#).is_err());
    }

    #[test]
    fn missing_optional_fields_default() {
        let text = r#"[{"venue": "Brookvale", "day": "Sunday", "activity": "Open Swim"}]"#;
        let sessions = parse_catalog(text).unwrap();
        assert_eq!(sessions[0].time, "");
        assert_eq!(sessions[0].location, "");
        assert!(!sessions[0].is_virtual);
    }
}
