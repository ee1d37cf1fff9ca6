/// Round to 2 decimal places, ties to even (same as numpy's `round`).
///
/// Only applied to final sums; intermediate totals keep full precision.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Two fraction digits, as written to CSV and shown in previews.
pub fn format_hours(value: f64) -> String {
    format!("{:.2}", value)
}
