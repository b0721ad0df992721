//! Error types for homework responses and records

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, HomeworkError>;

/// Errors raised while validating an API response or translating a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HomeworkError {
    /// Response or record does not have the expected JSON shape
    #[error("Unexpected response shape: {0}")]
    ShapeError(String),

    /// Required record field is absent or empty
    #[error("Missing required field \"{0}\" in homework record")]
    MissingField(&'static str),

    /// Status code is not in the verdict table
    #[error("Unknown homework status: {0}")]
    UnknownStatus(String),
}

impl HomeworkError {
    /// Create a shape error from a message
    pub fn shape(message: impl Into<String>) -> Self {
        Self::ShapeError(message.into())
    }
}
