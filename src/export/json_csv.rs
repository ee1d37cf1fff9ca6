// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{SummaryExport, get_headers, summary_to_row};
use crate::export::notify_export_success;
use crate::models::SummaryRow;
use crate::ui::messages::info;
use std::fs;
use std::io;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(rows: &[SummaryRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let records: Vec<SummaryExport> = rows.iter().map(SummaryExport::from).collect();
    let json_data = serde_json::to_string_pretty(&records)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    fs::write(path, json_data)?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with the fixed summary header and 2-digit hours.
pub(crate) fn export_csv(rows: &[SummaryRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    // Serialize fully before touching the target file
    let mut buf = Vec::new();
    write_csv(rows, &mut buf)?;
    fs::write(path, buf)?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Write the summary as CSV to any writer.
pub fn write_csv<W: io::Write>(rows: &[SummaryRow], writer: W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(get_headers())?;
    for row in rows {
        wtr.write_record(summary_to_row(row))?;
    }

    wtr.flush()?;
    Ok(())
}
