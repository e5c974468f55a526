//! Error types for anonboard.

use thiserror::Error;

/// Common error type for anonboard.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Database error.
    ///
    /// Storage faults from sqlx are converted into this variant and never
    /// retried by the board layer.
    #[error("database error: {0}")]
    Database(String),

    /// Database connection error.
    #[error("database connection error: {0}")]
    DatabaseConnection(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for BoardError {
    fn from(e: sqlx::Error) -> Self {
        BoardError::Database(e.to_string())
    }
}

/// Result type alias for anonboard operations.
pub type Result<T> = std::result::Result<T, BoardError>;
