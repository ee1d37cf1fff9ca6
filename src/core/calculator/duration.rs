use chrono::NaiveDateTime;

const NANOS_PER_HOUR: f64 = 3_600_000_000_000.0;
const MICROS_PER_HOUR: f64 = 3_600_000_000.0;

/// Hours elapsed from `start` to `end`, negative if `end` precedes `start`.
///
/// Overnight entries (`end < start` on a time-only export) are NOT wrapped
/// to the next day; the caller drops anything not strictly positive.
pub fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    let span = end - start;
    // Nanoseconds overflow past ~292 years; microseconds cover the rest
    match span.num_nanoseconds() {
        Some(ns) => ns as f64 / NANOS_PER_HOUR,
        None => span
            .num_microseconds()
            .map(|us| us as f64 / MICROS_PER_HOUR)
            .unwrap_or_else(|| span.num_seconds() as f64 / 3600.0),
    }
}

/// Positive duration in hours, `None` for zero or negative spans.
pub fn positive_hours(start: NaiveDateTime, end: NaiveDateTime) -> Option<f64> {
    let h = hours_between(start, end);
    (h > 0.0).then_some(h)
}
