//! Error types for the chosei ecosystem.

use thiserror::Error;

/// Errors that can occur in chosei operations.
#[derive(Error, Debug)]
pub enum ChoseiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for chosei operations.
pub type ChoseiResult<T> = Result<T, ChoseiError>;
