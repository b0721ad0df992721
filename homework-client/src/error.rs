//! Error types for the homework clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the review API or the chat API
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failed (network, timeout, DNS)
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API answered with a status other than the expected one
    #[error("Unexpected API status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Chat API accepted the request but refused to deliver it
    #[error("Message rejected: {0}")]
    Rejected(String),
}

impl ClientError {
    /// Create an unexpected status error from status code and message
    pub fn unexpected_status(status: u16, message: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { status, .. } if *status >= 500)
    }
}
