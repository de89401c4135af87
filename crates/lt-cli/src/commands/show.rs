//! Show command: the day-grouped, time-ordered schedule view.

use std::fmt::Write;

use anyhow::Result;
use lt_core::{Criteria, Mode, Session, WeekSchedule, build_schedule, classify};

/// Builds and prints the schedule for the given criteria.
pub fn run(sessions: &[Session], criteria: &Criteria, json: bool) -> Result<()> {
    let schedule = build_schedule(sessions, criteria);

    if json {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
    } else {
        print!("{}", render(&schedule, criteria.mode));
    }

    Ok(())
}

/// Renders the schedule as human-readable text, one block per weekday.
///
/// Empty buckets still get their day header so a quiet day reads as quiet
/// rather than missing.
#[must_use]
pub fn render(schedule: &WeekSchedule, mode: Mode) -> String {
    let mut out = String::new();

    for group in schedule.days() {
        let _ = writeln!(out, "{}", group.day);
        if group.sessions.is_empty() {
            let _ = writeln!(out, "  (no sessions)");
        }
        for session in &group.sessions {
            let _ = writeln!(out, "  {}", session_line(session, mode));
        }
        out.push('\n');
    }

    out
}

/// Formats one session line: time, activity, tag, and where it runs.
fn session_line(session: &Session, mode: Mode) -> String {
    let mut line = format!("{:<13}  {}", session.time, session.activity);

    // The category tag only means something for fitness classes.
    if mode == Mode::Fitness {
        let _ = write!(line, " [{}]", classify(&session.activity));
    }

    let _ = write!(line, "  @ {}", session.venue);
    if !session.location.is_empty() {
        let _ = write!(line, ", {}", session.location);
    }
    if session.is_virtual {
        line.push_str("  (virtual)");
    }

    line
}
