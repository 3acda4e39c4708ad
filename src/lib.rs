//! # Bugtracker - local bug report store
//!
//! Records and browses bug reports for a video game.
//!
//! Bugtracker provides:
//! - A single-table SQLite store for bug reports (category, reproduction steps, date)
//! - A no-op store for platforms without local relational storage
//! - A presentation model (`ReportBoard`) that drives the store from UI events
//! - Terminal rendering helpers for the report list

pub mod report;
pub mod storage;
pub mod board;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use report::{BugReport, ReportDate};
pub use storage::{NoopReportStore, ReportStore, SqliteReportStore};
pub use board::{Draft, ReportBoard, Submission};

/// Result type alias for Bugtracker operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Bugtracker operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

impl Error {
    /// True for validation rejections (no storage write was attempted)
    pub fn is_rejection(&self) -> bool {
        matches!(self, Error::MissingField(_))
    }
}
