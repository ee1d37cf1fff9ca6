// src/export/model.rs

use crate::core::calculator::rounding::format_hours;
use crate::core::columns::OUTPUT_HEADERS;
use crate::models::SummaryRow;
use serde::Serialize;

/// Flat record for JSON export, keyed by the output column names.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SummaryExport {
    #[serde(rename = "Employee_ID")]
    pub employee_id: Option<String>,
    #[serde(rename = "Created By")]
    pub created_by: Option<String>,
    #[serde(rename = "Department")]
    pub department: Option<String>,
    #[serde(rename = "Date")]
    pub date: Option<String>,
    #[serde(rename = "Activity")]
    pub activity: String,
    #[serde(rename = "Project_Entry")]
    pub project_entry: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Hours")]
    pub hours: f64,
    #[serde(rename = "Date_Total_Hours")]
    pub date_total_hours: f64,
}

impl From<&SummaryRow> for SummaryExport {
    fn from(r: &SummaryRow) -> Self {
        Self {
            employee_id: r.key.employee_id.clone(),
            created_by: r.key.created_by.clone(),
            department: r.key.department.clone(),
            date: r.key.date.map(|d| d.format("%Y-%m-%d").to_string()),
            activity: r.key.activity.clone(),
            project_entry: r.key.project_entry.clone(),
            description: r.key.description.clone(),
            hours: r.hours,
            date_total_hours: r.date_total_hours,
        }
    }
}

/// Header per CSV / XLSX / preview
pub(crate) fn get_headers() -> Vec<&'static str> {
    OUTPUT_HEADERS.to_vec()
}

/// One summary row as text cells, in header order. Nulls are empty cells.
pub(crate) fn summary_to_row(r: &SummaryRow) -> Vec<String> {
    let text = |v: &Option<String>| v.clone().unwrap_or_default();
    vec![
        text(&r.key.employee_id),
        text(&r.key.created_by),
        text(&r.key.department),
        r.date_str(),
        r.key.activity.clone(),
        text(&r.key.project_entry),
        text(&r.key.description),
        format_hours(r.hours),
        format_hours(r.date_total_hours),
    ]
}

pub(crate) fn summary_to_table(rows: &[SummaryRow]) -> Vec<Vec<String>> {
    rows.iter().map(summary_to_row).collect()
}
