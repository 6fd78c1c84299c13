// Rust guideline compliant 2026-10-19

//! Error types for the Leitner core library.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for Leitner operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Stable error categories reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Caller supplied unusable input (empty card text, bad box, bad config).
    InvalidInput,
    /// The referenced card does not exist.
    NotFound,
    /// A payload could not be read as a sequence of cards.
    InvalidFormat,
    /// The persistence backend failed to read or write.
    PersistenceFailure,
}

/// Error types for Leitner operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid card data supplied by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Flashcard not found.
    #[error("Flashcard not found: {0}")]
    NotFound(String),

    /// Payload is not a sequence of card-shaped records.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// The backend could not persist the collection.
    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),

    /// Invalid configuration value.
    #[error("Invalid config: {0}")]
    Config(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the stable category for this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidInput(_) | Error::Config(_) => ErrorKind::InvalidInput,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::InvalidFormat(_) | Error::Json(_) => ErrorKind::InvalidFormat,
            Error::PersistenceFailure(_) | Error::Io(_) => ErrorKind::PersistenceFailure,
        }
    }
}
