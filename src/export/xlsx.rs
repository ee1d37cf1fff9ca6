// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{EXCEL_DATE_FORMAT, date_to_excel_serial};
use crate::export::model::{get_headers, summary_to_row};
use crate::export::notify_export_success;
use crate::models::SummaryRow;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const DATE_COL: u16 = 3;
const HOURS_COL: u16 = 7;
const DAY_TOTAL_COL: u16 = 8;

/// Export XLSX con styling e auto-larghezza colonne.
pub(crate) fn export_xlsx(rows: &[SummaryRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Summary").map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    // ---------------------------
    // Righe (bande alternate)
    // ---------------------------
    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, summary) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        let values = summary_to_row(summary);

        for (col, value) in values.iter().enumerate() {
            let col = col as u16;
            match col {
                DATE_COL => write_date_cell(worksheet, row, summary, band)?,
                HOURS_COL => write_hours_cell(worksheet, row, col, summary.hours, band)?,
                DAY_TOTAL_COL => {
                    write_hours_cell(worksheet, row, col, summary.date_total_hours, band)?
                }
                _ => write_text_cell(worksheet, row, col, value, band)?,
            }

            let w = &mut col_widths[col as usize];
            *w = (*w).max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    let bytes = workbook.save_to_buffer().map_err(to_export_error)?;
    std::fs::write(path, bytes)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn base_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

/// Date as an Excel serial; an unknown date is left as an empty styled cell.
fn write_date_cell(ws: &mut Worksheet, row: u32, summary: &SummaryRow, bg: Color) -> AppResult<()> {
    let fmt = base_format(bg).set_num_format(EXCEL_DATE_FORMAT);

    match summary.key.date {
        Some(d) => ws
            .write_with_format(row, DATE_COL, date_to_excel_serial(d), &fmt)
            .map_err(to_export_error)?,
        None => ws
            .write_blank(row, DATE_COL, &fmt)
            .map_err(to_export_error)?,
    };

    Ok(())
}

fn write_hours_cell(ws: &mut Worksheet, row: u32, col: u16, hours: f64, bg: Color) -> AppResult<()> {
    let fmt = base_format(bg)
        .set_num_format("0.00")
        .set_align(FormatAlign::Right);

    ws.write_with_format(row, col, hours, &fmt)
        .map_err(to_export_error)?;
    Ok(())
}

fn write_text_cell(ws: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    let fmt = base_format(bg);

    if s.is_empty() {
        ws.write_blank(row, col, &fmt).map_err(to_export_error)?;
    } else {
        ws.write_with_format(row, col, s, &fmt)
            .map_err(to_export_error)?;
    }

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
