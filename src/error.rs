//! Error types for recipefind
//!
//! This module defines the error types used throughout the application,
//! using `thiserror` for ergonomic error handling.
//!
//! Failed searches never travel this path: the query client reports them
//! through [`crate::client::FetchOutcome`] and always hands the caller a
//! renderable result.

use thiserror::Error;

/// Main error type for recipefind operations
#[derive(Error, Debug)]
pub enum RecipefindError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Key-value store errors (database open, read, write)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Query rejected before any request was issued
    #[error("Invalid query: {0}")]
    Validation(String),

    /// Fetch-related errors (client construction, endpoint URL)
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// A history entry was requested that is not in the stored list
    #[error("No history entry at position {index} (history has {len} entries)")]
    HistorySelection {
        /// The 1-based position that was requested
        index: usize,
        /// Number of entries currently stored
        len: usize,
    },

    /// Line editor errors from the interactive session
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

/// Result type alias for recipefind operations
///
/// Uses `anyhow::Error` so callers can attach context while still being
/// able to downcast to [`RecipefindError`].
pub type Result<T> = anyhow::Result<T>;
