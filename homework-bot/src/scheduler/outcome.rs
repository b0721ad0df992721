//! Poll cycle results
//!
//! These types only exist at runtime between one cycle and the loop that
//! inspects it.

use homework_client::ClientError;
use homework_core::HomeworkError;
use thiserror::Error;

/// Result of one poll cycle
#[derive(Debug)]
pub enum Outcome {
    /// Window had no status changes
    NoChange,
    /// A status change was announced and the cursor moved forward
    Notified,
    /// The cycle failed; the cursor was left in place
    Failed(CycleError),
}

/// Any failure that aborts a poll cycle
#[derive(Debug, Error)]
pub enum CycleError {
    /// Review API could not be reached or answered badly
    #[error("{0}")]
    Fetch(#[from] ClientError),

    /// Response or homework record is malformed
    #[error("{0}")]
    Response(#[from] HomeworkError),

    /// Status notification could not be delivered
    #[error("Failed to deliver notification: {0}")]
    Notify(#[source] ClientError),
}

impl CycleError {
    /// Whether the review API is likely to recover on its own
    ///
    /// Covers transport failures and 5xx answers on the fetch step.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            CycleError::Fetch(e) if e.is_server_error() || matches!(e, ClientError::RequestFailed(_))
        )
    }
}
