// src/export/excel_date.rs

use chrono::NaiveDate;

/// Excel number format used for the `Date` column.
pub(crate) const EXCEL_DATE_FORMAT: &str = "yyyy-mm-dd";

/// Days since the Excel epoch (1899-12-30), as Excel stores dates.
pub(crate) fn date_to_excel_serial(d: NaiveDate) -> f64 {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or_default();
    (d - excel_epoch).num_days() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_serials() {
        assert_eq!(date_to_excel_serial(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()), 45292.0);
    }
}
