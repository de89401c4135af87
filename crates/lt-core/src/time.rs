//! Start-time extraction from human-written time ranges.
//!
//! Timetable times arrive as text in one of two separator styles
//! (`"6:35 - 7:05"` or `"6:35-7:05"`), always 24-hour. Sorting only needs a
//! comparable start value, so the range collapses to `hour + minute/60`.

/// Extracts the start of a time range as fractional hours.
///
/// Splits on `" - "` when present, otherwise on the first `'-'`, then on
/// `':'` within the start segment. Any malformed input (missing colon,
/// non-numeric tokens, out-of-range clock values, empty string) yields `0.0`
/// so that downstream sorting never aborts; a garbled session sorts to the
/// top of its day instead of poisoning the whole schedule.
///
/// Well-formed input always produces a finite value in `[0, 24)`.
#[must_use]
pub fn parse_start_hour(time_range: &str) -> f64 {
    let start = match time_range.split_once(" - ") {
        Some((start, _)) => start,
        None => time_range.split_once('-').map_or(time_range, |(s, _)| s),
    };

    let Some((hour, minute)) = start.split_once(':') else {
        return 0.0;
    };
    let (Ok(hour), Ok(minute)) = (
        hour.trim().parse::<u32>(),
        minute.trim().parse::<u32>(),
    ) else {
        return 0.0;
    };
    if hour >= 24 || minute >= 60 {
        return 0.0;
    }

    f64::from(hour) + f64::from(minute) / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn parses_spaced_separator() {
        assert_close(parse_start_hour("6:35 - 7:05"), 6.0 + 35.0 / 60.0);
    }

    #[test]
    fn parses_compact_separator() {
        assert_close(parse_start_hour("06:35-07:05"), 6.0 + 35.0 / 60.0);
    }

    #[test]
    fn parses_on_the_hour() {
        assert_close(parse_start_hour("18:00 - 19:00"), 18.0);
    }

    #[test]
    fn midnight_is_zero() {
        assert_close(parse_start_hour("0:00 - 1:00"), 0.0);
    }

    #[test]
    fn garbled_input_is_zero() {
        assert_close(parse_start_hour("garbled"), 0.0);
        assert_close(parse_start_hour(""), 0.0);
        assert_close(parse_start_hour("noon - 1pm"), 0.0);
        assert_close(parse_start_hour("--"), 0.0);
    }

    #[test]
    fn out_of_range_clock_values_are_zero() {
        assert_close(parse_start_hour("25:00 - 26:00"), 0.0);
        assert_close(parse_start_hour("10:75 - 11:00"), 0.0);
    }

    #[test]
    fn missing_end_segment_still_parses_start() {
        assert_close(parse_start_hour("9:15"), 9.25);
    }

    #[test]
    fn result_stays_in_day_range() {
        for hour in 0..24 {
            for minute in (0..60).step_by(5) {
                let value = parse_start_hour(&format!("{hour}:{minute:02} - 23:59"));
                assert!((0.0..24.0).contains(&value), "{hour}:{minute:02} -> {value}");
            }
        }
    }
}
