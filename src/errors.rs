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

    #[error("Invalid activity category: {0}")]
    InvalidCategory(String),

    #[error("Invalid attendance status: {0}")]
    InvalidAttendance(String),

    #[error("Invalid task priority: {0}")]
    InvalidPriority(String),

    #[error("Invalid task status: {0}")]
    InvalidStatus(String),

    // ---------------------------
    // Validation (rejected before any write)
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Report for {0} is read-only: {1}")]
    ReportLocked(String, String),

    #[error("Invalid task transition: {0}")]
    TaskTransition(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("No daily report found for {0}")]
    NoReportForDate(String),

    #[error("No task found with id {0}")]
    NoSuchTask(i64),

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
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
