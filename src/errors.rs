//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid report status: {0}")]
    InvalidStatus(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    #[error("Start time must be earlier than end time ({start} >= {end})")]
    InvalidTimeRange { start: String, end: String },

    // ---------------------------
    // Auth errors
    // ---------------------------
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("This operation requires {0} privileges")]
    NotAuthorized(&'static str),

    #[error("Password hashing error: {0}")]
    Hash(String),

    // ---------------------------
    // Roster errors
    // ---------------------------
    #[error("Employee with {0} '{1}' already exists")]
    DuplicateEmployee(&'static str, String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Import / export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Import error: {0}")]
    Import(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
