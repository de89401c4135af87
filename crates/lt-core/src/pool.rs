//! Pool/land partitioning of the catalog.
//!
//! One policy, applied everywhere: a session counts as a pool session when
//! either its location or its activity text carries a pool indicator. The
//! activity check catches aqua classes scheduled against a bare studio name,
//! which a location-only test would misfile as land sessions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::session::Session;
use crate::types::ParseError;

/// Location substrings that mark a pool session (matched lowercase).
const POOL_LOCATION_KEYWORDS: [&str; 3] = ["pool", "splash", "swimming"];

/// Activity substrings that mark a pool session (matched lowercase).
const POOL_ACTIVITY_KEYWORDS: [&str; 3] = ["swim", "aqua", "water"];

/// Returns true when the session belongs to the pool partition.
#[must_use]
pub fn is_pool_session(session: &Session) -> bool {
    let location = session.location.to_lowercase();
    let activity = session.activity.to_lowercase();

    POOL_LOCATION_KEYWORDS
        .iter()
        .any(|keyword| location.contains(keyword))
        || POOL_ACTIVITY_KEYWORDS
            .iter()
            .any(|keyword| activity.contains(keyword))
}

/// Sub-classification of pool sessions by pool area.
///
/// `All` is both the "any pool" filter value and the classification of pool
/// sessions whose location names no specific pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PoolType {
    #[default]
    All,
    Main,
    Leisure,
}

impl PoolType {
    /// String representation used in CLI flags and JSON output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Main => "main",
            Self::Leisure => "leisure",
        }
    }
}

impl fmt::Display for PoolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PoolType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "main" => Ok(Self::Main),
            "leisure" => Ok(Self::Leisure),
            _ => Err(ParseError::UnknownPoolType(s.to_string())),
        }
    }
}

impl Serialize for PoolType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PoolType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Classifies a pool session's pool area from its location text.
///
/// Meaningful only for sessions where [`is_pool_session`] is true; for
/// anything else it reports [`PoolType::All`].
#[must_use]
pub fn pool_type(session: &Session) -> PoolType {
    let location = session.location.to_lowercase();

    if location.contains("main pool") {
        PoolType::Main
    } else if ["leisure pool", "small pool", "learner pool"]
        .iter()
        .any(|keyword| location.contains(keyword))
    {
        PoolType::Leisure
    } else {
        PoolType::All
    }
}
