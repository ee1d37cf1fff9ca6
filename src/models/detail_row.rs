use super::summary_row::SummaryKey;
use chrono::NaiveDate;

/// A single activity entry that survived extraction and filtering.
/// `hours` is strictly positive and unrounded.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub employee_id: Option<String>,
    pub created_by: Option<String>,
    pub department: Option<String>,
    pub date: Option<NaiveDate>,
    pub activity: String,
    pub project_entry: Option<String>,
    pub description: Option<String>,
    pub hours: f64,
}

impl DetailRow {
    pub fn key(&self) -> SummaryKey {
        SummaryKey {
            employee_id: self.employee_id.clone(),
            created_by: self.created_by.clone(),
            department: self.department.clone(),
            date: self.date,
            activity: self.activity.clone(),
            project_entry: self.project_entry.clone(),
            description: self.description.clone(),
        }
    }
}
