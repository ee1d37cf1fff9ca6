// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_parent_dir, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::naming::OutputTarget;
use crate::export::xlsx::export_xlsx;
use crate::models::SummaryRow;
use std::path::PathBuf;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the summary to `target` in `format` and return the final path.
    ///
    /// An existing explicit file needs `force` (or a yes at the prompt);
    /// generated names are always replaced.
    pub fn export(
        rows: &[SummaryRow],
        format: ExportFormat,
        target: &OutputTarget,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = target.resolve(format);

        ensure_writable(&path, force || !target.is_explicit())?;
        ensure_parent_dir(&path)?;

        match format {
            ExportFormat::Csv => export_csv(rows, &path)?,
            ExportFormat::Json => export_json(rows, &path)?,
            ExportFormat::Xlsx => export_xlsx(rows, &path)?,
        }

        Ok(path)
    }
}
