//! Time utilities: tolerant timestamp parsing for activity start/end cells.

use crate::utils::date::DATETIME_FORMATS;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M", "%I:%M:%S %p", "%I:%M %p"];

/// Wall-clock time of day, `None` if unrecognised.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(t, fmt).ok())
}

/// Tolerant timestamp parser.
///
/// Full date+time values are taken as-is. A bare time of day is placed on
/// `anchor`, so that two time-only bounds of the same block share one day.
/// No timezone handling: everything is naive wall-clock time.
pub fn parse_timestamp(s: &str, anchor: NaiveDate) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    parse_time(s).map(|t| anchor.and_time(t))
}

/// Anchor for time-only values when the row has no usable date.
pub fn fallback_anchor() -> NaiveDate {
    NaiveDate::default()
}
