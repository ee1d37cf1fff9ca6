//! Path utilities: expand ~, locate the newest input export.

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

fn is_csv(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("csv"))
            .unwrap_or(false)
}

/// Creation time where the platform records it, modification time otherwise.
fn file_stamp(path: &Path) -> SystemTime {
    fs::metadata(path)
        .and_then(|m| m.created().or_else(|_| m.modified()))
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

/// The most recently created `*.csv` directly inside `dir`.
///
/// A missing folder or a folder without CSV files is `NoInputFound`.
/// Equal timestamps fall back to the greatest file name.
pub fn latest_csv_in(dir: &Path) -> AppResult<PathBuf> {
    let not_found = || AppError::NoInputFound(dir.display().to_string());

    if !dir.is_dir() {
        return Err(not_found());
    }

    fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| is_csv(p))
        .max_by(|a, b| {
            file_stamp(a)
                .cmp(&file_stamp(b))
                .then_with(|| a.file_name().cmp(&b.file_name()))
        })
        .ok_or_else(not_found)
}
