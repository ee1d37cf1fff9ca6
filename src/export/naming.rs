// src/export/naming.rs

use crate::export::ExportFormat;
use crate::utils::date::run_date_suffix;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Where the summary goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Caller-supplied file path, used as-is.
    Explicit(PathBuf),
    /// `<dir>/<stem>[_<run date>].<ext>`
    Generated {
        dir: PathBuf,
        stem: String,
        run_date: Option<NaiveDate>,
    },
}

impl OutputTarget {
    pub fn resolve(&self, format: ExportFormat) -> PathBuf {
        match self {
            OutputTarget::Explicit(p) => p.clone(),
            OutputTarget::Generated {
                dir,
                stem,
                run_date,
            } => dir.join(generated_file_name(stem, *run_date, format)),
        }
    }

    /// Generated names belong to this tool and are replaced on every run.
    pub fn is_explicit(&self) -> bool {
        matches!(self, OutputTarget::Explicit(_))
    }
}

pub fn generated_file_name(stem: &str, run_date: Option<NaiveDate>, format: ExportFormat) -> String {
    match run_date {
        Some(d) => format!("{stem}_{}.{}", run_date_suffix(d), format.extension()),
        None => format!("{stem}.{}", format.extension()),
    }
}

/// Infer the format from an explicit output path's extension, if known.
pub fn format_from_path(path: &Path) -> Option<ExportFormat> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    ExportFormat::from_extension(&ext)
}
