//! # clcnt - Calorie Counter
//!
//! A small HTTP service that records what was eaten and when, and reports
//! average daily calorie intake over recent days.
//!
//! clcnt provides:
//! - An entry registry backed by a single SQLite table
//! - Day-window arithmetic anchored at local midnight
//! - An axum router exposing the registry over a JSON API
//! - A CLI to serve the API or work with the database directly

pub mod config;
pub mod entry;
pub mod output;
pub mod server;
pub mod storage;
pub mod ui;
pub mod window;

// Re-exports for convenient access
pub use entry::Entry;
pub use storage::{Registry, SchemaStatus};
pub use window::DayCount;

/// Result type alias for clcnt operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for clcnt operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Registry unavailable: {0}")]
    Unavailable(String),
}
