//! Unified application error type.
//! All modules (core, export, config, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Input discovery
    // ---------------------------
    #[error("No CSV files found in {0}")]
    NoInputFound(String),

    #[error("Input file not found: {0}")]
    InputFileMissing(String),

    // ---------------------------
    // Schema / pipeline errors
    // ---------------------------
    #[error("Required column missing from input header: {0}")]
    MissingColumn(String),

    #[error("Schema mismatch: no 'Start Time_N' activity columns found (N = 1..{0})")]
    NoActivityData(usize),

    #[error("No valid activity rows in {0}: every entry was incomplete or had a non-positive duration")]
    EmptyResult(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Process exit status for this error.
    /// A missing input file is not a failure: the run simply has nothing to do.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::NoInputFound(_) | AppError::InputFileMissing(_) => 0,
            _ => 1,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
