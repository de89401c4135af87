//! Activity categorisation.
//!
//! Activity labels are free text written by venue staff, so categorisation is
//! keyword matching against an ordered rule table. Order matters: some
//! keywords could plausibly sit in more than one group ("step" appears inside
//! "Fitsteps"), and the first matching group wins. Precedence lives in the
//! [`RULES`] table rather than control flow so it can be tested on its own.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::session::Session;
use crate::types::ParseError;

/// Coarse activity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Cardio,
    Strength,
    MindBody,
    Core,
    Spinning,
    Other,
}

impl Category {
    /// String representation used on the wire and in CLI flags.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cardio => "cardio",
            Self::Strength => "strength",
            Self::MindBody => "mind-body",
            Self::Core => "core",
            Self::Spinning => "spinning",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cardio" => Ok(Self::Cardio),
            "strength" => Ok(Self::Strength),
            "mind-body" | "mindbody" => Ok(Self::MindBody),
            "core" => Ok(Self::Core),
            "spinning" => Ok(Self::Spinning),
            "other" => Ok(Self::Other),
            _ => Err(ParseError::UnknownCategory(s.to_string())),
        }
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Labels that mean "no session here" and classify as [`Category::Other`]
/// before any keyword matching.
const EXCLUDED_LABELS: [&str; 2] = ["none", "-"];

/// Ordered keyword groups. Matching is substring-based and the first group
/// containing a matching keyword wins, so the group order is load-bearing.
pub const RULES: &[(Category, &[&str])] = &[
    (
        Category::Spinning,
        &["spinning", "rpm", "sprint", "trip", "cycle", "spin"],
    ),
    (
        Category::Cardio,
        &[
            "cardio",
            "attack",
            "combat",
            "zumba",
            "konga",
            "dance",
            "aerodance",
            "aerotone",
            "fitsteps",
            "step",
            "aqua",
            "boxing",
            "boxercise",
            "kickboxing",
            "baby ballet",
        ],
    ),
    (
        Category::Strength,
        &[
            "tone",
            "conditioning",
            "circuit",
            "kettlebell",
            "strength",
            "synergy",
            "bootcamp",
            "hiit",
            "bodypump",
            "grit",
            "sculpt",
            "pump",
            "chair based",
            "junior circuit",
            "low level circuit",
        ],
    ),
    (
        Category::MindBody,
        &[
            "yoga",
            "pilates",
            "balance",
            "bodybalance",
            "relaxation",
            "tai chi",
            "tai-chi",
            "mobility",
            "barre",
            "ballet barre",
            "flow",
            "gentle flow",
            "vinyassa",
            "hatha",
            "yin",
        ],
    ),
    (
        Category::Core,
        &["core", "abs", "bums", "legs", "tums", "body sculpt"],
    ),
];

/// Classifies a free-text activity label.
///
/// Total and referentially stable: the same label always yields the same
/// category, and the result is never undefined (unmatched labels fall back
/// to [`Category::Other`]).
#[must_use]
pub fn classify(activity: &str) -> Category {
    let label = activity.trim().to_lowercase();

    if label.is_empty()
        || EXCLUDED_LABELS.contains(&label.as_str())
        || label.contains("no classes")
    {
        return Category::Other;
    }

    // On-demand library sessions carry their own, narrower keyword check.
    if label.contains("on demand") {
        return if label.contains("spin") || label.contains("cycle") {
            Category::Spinning
        } else if label.contains("core") || label.contains("abs") {
            Category::Core
        } else if label.contains("yoga") || label.contains("pilates") {
            Category::MindBody
        } else {
            Category::Other
        };
    }

    for (category, keywords) in RULES {
        if keywords.iter().any(|keyword| label.contains(keyword)) {
            return *category;
        }
    }

    // Unqualified branded franchise names ("Les Mills") are mostly
    // strength-oriented in this catalog. Best-effort default, not a
    // semantic guarantee.
    if label.contains("les mills") {
        return Category::Strength;
    }

    Category::Other
}

/// Distinct activity labels that resolve to [`Category::Other`] without
/// matching an explicit exclusion.
///
/// Operator surface for spotting catalog labels the rule table does not
/// cover yet; there is no corrective workflow beyond extending [`RULES`].
#[must_use]
pub fn uncategorized_activities(sessions: &[Session]) -> Vec<String> {
    let labels: BTreeSet<String> = sessions
        .iter()
        .filter(|session| {
            let label = session.activity.trim().to_lowercase();
            !label.is_empty()
                && !EXCLUDED_LABELS.contains(&label.as_str())
                && !label.contains("no classes")
                && classify(&session.activity) == Category::Other
        })
        .map(|session| session.activity.clone())
        .collect();
    labels.into_iter().collect()
}
