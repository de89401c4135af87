//! Core type definitions: venues, weekdays, and boundary parse errors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when parsing enumerated values at the catalog or CLI boundary.
///
/// These never escape the pipeline itself; inside the engine every lookup is
/// total and degrades to a safe default instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The venue string is not one of the known venues.
    #[error("unknown venue: {0}")]
    UnknownVenue(String),

    /// The day string is not one of the seven weekday names.
    #[error("unknown day: {0}")]
    UnknownDay(String),

    /// The category string is not one of the six categories.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// The mode string is neither "fitness" nor "swimming".
    #[error("unknown mode: {0}")]
    UnknownMode(String),

    /// The pool type string is not one of "all", "main", "leisure".
    #[error("unknown pool type: {0}")]
    UnknownPoolType(String),
}

/// The fixed set of leisure centres the timetable covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Venue {
    Brookvale,
    Hartfield,
    Riverside,
    Stanmore,
}

impl Venue {
    /// All known venues, in display order.
    pub const ALL: [Self; 4] = [
        Self::Brookvale,
        Self::Hartfield,
        Self::Riverside,
        Self::Stanmore,
    ];

    /// String representation matching the catalog wire format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Brookvale => "Brookvale",
            Self::Hartfield => "Hartfield",
            Self::Riverside => "Riverside",
            Self::Stanmore => "Stanmore",
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Venue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "brookvale" => Ok(Self::Brookvale),
            "hartfield" => Ok(Self::Hartfield),
            "riverside" => Ok(Self::Riverside),
            "stanmore" => Ok(Self::Stanmore),
            _ => Err(ParseError::UnknownVenue(s.to_string())),
        }
    }
}

impl Serialize for Venue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Venue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A weekday in the canonical Monday..Sunday order.
///
/// The discriminant order is the grouping order; it is fixed and not
/// locale-dependent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All seven weekdays, Monday first.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Position in the canonical week, 0 for Monday through 6 for Sunday.
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// String representation matching the catalog wire format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Day {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" => Ok(Self::Monday),
            "tuesday" => Ok(Self::Tuesday),
            "wednesday" => Ok(Self::Wednesday),
            "thursday" => Ok(Self::Thursday),
            "friday" => Ok(Self::Friday),
            "saturday" => Ok(Self::Saturday),
            "sunday" => Ok(Self::Sunday),
            _ => Err(ParseError::UnknownDay(s.to_string())),
        }
    }
}

impl Serialize for Day {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Day {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
