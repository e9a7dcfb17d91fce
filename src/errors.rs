//! Unified application error type.
//! All modules (db, core, cli, storage, utils) return AppError so the
//! command layer can report every failure the same way.

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
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    // ---------------------------
    // Parsing / input errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Day {0} does not exist in the schedule")]
    UnknownDay(String),

    #[error("Activity #{index} does not exist on day {day}")]
    UnknownActivity { day: String, index: usize },

    #[error("Task #{0} does not exist")]
    UnknownTask(u32),

    // ---------------------------
    // Remote services
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Api(String),

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

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
