use chrono::NaiveDate;

/// Full grouping key of the summary.
///
/// Every field takes part in equality and ordering, `None` included:
/// a null Department is its own group, never a dropped row.
/// Field order is the output sort order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SummaryKey {
    pub employee_id: Option<String>,
    pub created_by: Option<String>,
    pub department: Option<String>,
    pub date: Option<NaiveDate>,
    pub activity: String,
    pub project_entry: Option<String>,
    pub description: Option<String>,
}

/// One output row: hours for a key plus the employee's total for that day.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub key: SummaryKey,
    pub hours: f64,
    pub date_total_hours: f64,
}

impl SummaryRow {
    /// `YYYY-MM-DD`, or an empty string when the date is unknown.
    pub fn date_str(&self) -> String {
        self.key
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    /// `(EmployeeId, Date)`: the scope of `date_total_hours`.
    pub fn day_key(&self) -> (Option<String>, Option<NaiveDate>) {
        (self.key.employee_id.clone(), self.key.date)
    }
}
