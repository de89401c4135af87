//! Day-grouped, time-ordered view of a filtered session set.

use serde::Serialize;

use crate::filter::{Criteria, filter_sessions};
use crate::session::Session;
use crate::time::parse_start_hour;
use crate::types::Day;

/// One weekday bucket of the grouped view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayGroup {
    pub day: Day,
    pub sessions: Vec<Session>,
}

/// The grouped output: exactly seven buckets in canonical Monday..Sunday
/// order, each sorted by start time.
///
/// Empty buckets are kept; "nothing on Thursday" is a meaningful signal to
/// the presentation layer, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeekSchedule {
    days: Vec<DayGroup>,
}

impl WeekSchedule {
    /// The seven day buckets in canonical order.
    #[must_use]
    pub fn days(&self) -> &[DayGroup] {
        &self.days
    }

    /// Sessions grouped under the given day.
    #[must_use]
    pub fn sessions_on(&self, day: Day) -> &[Session] {
        &self.days[day.index()].sessions
    }

    /// Total session count across all buckets.
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.days.iter().map(|group| group.sessions.len()).sum()
    }

    /// True when every bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.session_count() == 0
    }
}

/// Groups sessions by weekday and sorts each bucket by start time.
///
/// The per-bucket sort is stable, so sessions sharing a start time keep
/// their input order. Unparseable times sort as midnight (see
/// [`parse_start_hour`]).
#[must_use]
pub fn sort_and_group(sessions: Vec<Session>) -> WeekSchedule {
    let mut days: Vec<DayGroup> = Day::ALL
        .iter()
        .map(|&day| DayGroup {
            day,
            sessions: Vec::new(),
        })
        .collect();

    for session in sessions {
        days[session.day.index()].sessions.push(session);
    }

    for group in &mut days {
        group
            .sessions
            .sort_by(|a, b| parse_start_hour(&a.time).total_cmp(&parse_start_hour(&b.time)));
    }

    WeekSchedule { days }
}

/// Full pipeline: filter, then group and sort. The single entry point the
/// presentation layer calls.
#[must_use]
pub fn build_schedule(sessions: &[Session], criteria: &Criteria) -> WeekSchedule {
    sort_and_group(filter_sessions(sessions, criteria))
}
