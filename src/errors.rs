//! Unified application error type.
//! Ledger operations, the store, the config layer and the CLI all return
//! AppError so callers can tell a rejected check-in from a broken database.

use chrono::{NaiveDate, NaiveDateTime};
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
    // Input validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    // ---------------------------
    // Directory lookups
    // ---------------------------
    #[error("Member '{0}' not found")]
    MemberNotFound(String),

    #[error("Class '{0}' not found")]
    ClassNotFound(String),

    // ---------------------------
    // Attendance ledger
    // ---------------------------
    #[error("Member '{member_id}' is already checked in on {date}")]
    AlreadyCheckedIn { member_id: String, date: NaiveDate },

    #[error("Visit record {0} not found")]
    RecordNotFound(i64),

    #[error("Visit record {0} is already checked out")]
    AlreadyCheckedOut(i64),

    #[error("Clock skew on visit {record_id}: check-out at {now} precedes check-in at {check_in}")]
    ClockSkew {
        record_id: i64,
        check_in: NaiveDateTime,
        now: NaiveDateTime,
    },

    #[error("No open visit for member '{member_id}' on {date}")]
    NotCheckedIn { member_id: String, date: NaiveDate },

    // ---------------------------
    // Session
    // ---------------------------
    #[error("Operator '{operator}' is not allowed to {action}")]
    Forbidden { operator: String, action: String },

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
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
