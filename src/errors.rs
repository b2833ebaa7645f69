//! Unified application error type.
//! All modules (db, core, cli, config) return AppError so that the binary
//! can print a single `Error: ...` line and exit non-zero.

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

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Feed
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to load Ops: {0}")]
    Feed(String),

    #[error("Unknown op id: {0}")]
    UnknownOp(u64),

    #[error("Operator {operator_id} is not on the roster of op {op_id}")]
    UnknownOperator { op_id: u64, operator_id: u64 },

    // ---------------------------
    // Check-in / check-out
    // ---------------------------
    #[error("{0}")]
    CheckRejected(String),

    #[error("{0}")]
    NotOffered(String),

    #[error("No code entered")]
    EmptyCode,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
