//! The filter pipeline: mode partition plus ANDed predicates.
//!
//! Mode is a plain field on [`Criteria`], threaded by value on every call.
//! The engine holds no state between invocations, so filtering the same
//! input with the same criteria always returns the same subset.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::category::{Category, classify};
use crate::pool::{PoolType, is_pool_session, pool_type};
use crate::session::Session;
use crate::types::{ParseError, Venue};

/// Which partition of the catalog is being browsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Land sessions: fitness classes.
    #[default]
    Fitness,
    /// Pool sessions: swimming.
    Swimming,
}

impl Mode {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fitness => "fitness",
            Self::Swimming => "swimming",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fitness" => Ok(Self::Fitness),
            "swimming" => Ok(Self::Swimming),
            _ => Err(ParseError::UnknownMode(s.to_string())),
        }
    }
}

impl Serialize for Mode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Filter criteria for one pipeline invocation.
///
/// Every constraint is independent and the constraints combine with AND.
/// The same shape round-trips through JSON for callers that persist a
/// user's last selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    /// Pool/land partition to browse. Default: fitness.
    #[serde(default)]
    pub mode: Mode,

    /// Venues to include. The empty set shows nothing; the full set, everything.
    #[serde(default = "all_venues")]
    pub venues: BTreeSet<Venue>,

    /// Category constraint; `None` means unconstrained. Fitness mode only.
    #[serde(default)]
    pub category: Option<Category>,

    /// When false, virtual sessions are excluded. Ignored in swimming mode
    /// (virtual pool sessions do not occur).
    #[serde(default = "default_true")]
    pub include_virtual: bool,

    /// Pool area constraint. Swimming mode only.
    #[serde(default)]
    pub pool_type: PoolType,
}

fn all_venues() -> BTreeSet<Venue> {
    Venue::ALL.into_iter().collect()
}

const fn default_true() -> bool {
    true
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            mode: Mode::Fitness,
            venues: all_venues(),
            category: None,
            include_virtual: true,
            pool_type: PoolType::All,
        }
    }
}

impl Criteria {
    /// Returns true when the session passes every active predicate.
    #[must_use]
    pub fn matches(&self, session: &Session) -> bool {
        if !self.venues.contains(&session.venue) {
            return false;
        }
        match self.mode {
            Mode::Fitness => {
                if is_pool_session(session) {
                    return false;
                }
                if !self.include_virtual && session.is_virtual {
                    return false;
                }
                self.category
                    .is_none_or(|category| classify(&session.activity) == category)
            }
            Mode::Swimming => {
                if !is_pool_session(session) {
                    return false;
                }
                self.pool_type == PoolType::All || pool_type(session) == self.pool_type
            }
        }
    }
}

/// Applies the criteria to a session collection, preserving input order.
#[must_use]
pub fn filter_sessions(sessions: &[Session], criteria: &Criteria) -> Vec<Session> {
    sessions
        .iter()
        .filter(|session| criteria.matches(session))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Day;

    fn catalog() -> Vec<Session> {
        let mut virtual_spin = Session::new(
            Venue::Brookvale,
            Day::Tuesday,
            "17:30 - 18:15",
            "Virtual Spin",
            "Studio 2",
        );
        virtual_spin.is_virtual = true;

        vec![
            Session::new(Venue::Riverside, Day::Monday, "6:35 - 7:05", "Aqua Fit", "Main Pool"),
            Session::new(Venue::Riverside, Day::Monday, "9:00 - 10:00", "Zumba", "Dance Studio"),
            Session::new(Venue::Stanmore, Day::Wednesday, "12:00-13:00", "Lane Swim", "Leisure Pool"),
            Session::new(Venue::Hartfield, Day::Friday, "18:00 - 19:00", "Yoga", "Studio 1"),
            virtual_spin,
        ]
    }

    #[test]
    fn fitness_mode_excludes_pool_sessions() {
        let result = filter_sessions(&catalog(), &Criteria::default());
        assert!(result.iter().all(|s| !is_pool_session(s)));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn swimming_mode_retains_only_pool_sessions() {
        let criteria = Criteria {
            mode: Mode::Swimming,
            ..Criteria::default()
        };
        let result = filter_sessions(&catalog(), &criteria);
        assert!(result.iter().all(is_pool_session));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn venue_filter_is_inclusion() {
        let criteria = Criteria {
            venues: [Venue::Hartfield].into_iter().collect(),
            ..Criteria::default()
        };
        let result = filter_sessions(&catalog(), &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].activity, "Yoga");
    }

    #[test]
    fn empty_venue_set_shows_nothing() {
        let criteria = Criteria {
            venues: BTreeSet::new(),
            ..Criteria::default()
        };
        assert!(filter_sessions(&catalog(), &criteria).is_empty());
    }

    #[test]
    fn category_filter_applies_in_fitness_mode() {
        let criteria = Criteria {
            category: Some(Category::Cardio),
            ..Criteria::default()
        };
        let result = filter_sessions(&catalog(), &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].activity, "Zumba");
    }

    #[test]
    fn virtual_sessions_can_be_excluded() {
        let criteria = Criteria {
            include_virtual: false,
            ..Criteria::default()
        };
        let result = filter_sessions(&catalog(), &criteria);
        assert!(result.iter().all(|s| !s.is_virtual));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn pool_type_filter_applies_in_swimming_mode() {
        let criteria = Criteria {
            mode: Mode::Swimming,
            pool_type: PoolType::Main,
            ..Criteria::default()
        };
        let result = filter_sessions(&catalog(), &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].location, "Main Pool");

        let criteria = Criteria {
            mode: Mode::Swimming,
            pool_type: PoolType::Leisure,
            ..Criteria::default()
        };
        let result = filter_sessions(&catalog(), &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].activity, "Lane Swim");
    }

    #[test]
    fn category_is_ignored_in_swimming_mode() {
        // A category constraint must not drop pool sessions.
        let criteria = Criteria {
            mode: Mode::Swimming,
            category: Some(Category::Strength),
            ..Criteria::default()
        };
        assert_eq!(filter_sessions(&catalog(), &criteria).len(), 2);
    }

    #[test]
    fn pool_type_is_ignored_in_fitness_mode() {
        let criteria = Criteria {
            pool_type: PoolType::Main,
            ..Criteria::default()
        };
        assert_eq!(filter_sessions(&catalog(), &criteria).len(), 3);
    }

    #[test]
    fn filtering_is_idempotent() {
        let criteria = Criteria {
            category: Some(Category::MindBody),
            ..Criteria::default()
        };
        let once = filter_sessions(&catalog(), &criteria);
        let twice = filter_sessions(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn criteria_defaults_match_contract() {
        let criteria = Criteria::default();
        assert_eq!(criteria.mode, Mode::Fitness);
        assert_eq!(criteria.venues.len(), Venue::ALL.len());
        assert_eq!(criteria.category, None);
        assert!(criteria.include_virtual);
        assert_eq!(criteria.pool_type, PoolType::All);
    }

    #[test]
    fn criteria_deserializes_with_defaults() {
        let criteria: Criteria = serde_json::from_str("{}").unwrap();
        assert_eq!(criteria, Criteria::default());

        let criteria: Criteria =
            serde_json::from_str(r#"{"mode": "swimming", "pool_type": "main"}"#).unwrap();
        assert_eq!(criteria.mode, Mode::Swimming);
        assert_eq!(criteria.pool_type, PoolType::Main);
        assert!(criteria.include_virtual);
    }
}
