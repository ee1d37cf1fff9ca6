use crate::core::calculator::rounding::round2;
use crate::models::{DetailRow, SummaryKey, SummaryRow};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

type DayKey = (Option<String>, Option<NaiveDate>);

/// Two-level aggregation of the detail table.
///
/// 1. Sum `hours` per full key (nulls are ordinary key values).
/// 2. Sum those per `(employee, date)` and broadcast the total onto each row.
///
/// Both sums run at full precision; rounding happens last.
/// Rows come out sorted by key.
pub fn aggregate(details: &[DetailRow]) -> Vec<SummaryRow> {
    let by_key = sum_by_key(details);
    let day_totals = sum_by_day(&by_key);

    by_key
        .into_iter()
        .map(|(key, hours)| {
            let day_total = day_totals
                .get(&(key.employee_id.clone(), key.date))
                .copied()
                .unwrap_or(hours);

            SummaryRow {
                key,
                hours: round2(hours),
                date_total_hours: round2(day_total),
            }
        })
        .collect()
}

fn sum_by_key(details: &[DetailRow]) -> BTreeMap<SummaryKey, f64> {
    let mut groups: BTreeMap<SummaryKey, f64> = BTreeMap::new();
    for d in details {
        *groups.entry(d.key()).or_insert(0.0) += d.hours;
    }
    groups
}

fn sum_by_day(by_key: &BTreeMap<SummaryKey, f64>) -> HashMap<DayKey, f64> {
    let mut totals: HashMap<DayKey, f64> = HashMap::new();
    for (key, hours) in by_key {
        *totals
            .entry((key.employee_id.clone(), key.date))
            .or_insert(0.0) += *hours;
    }
    totals
}
