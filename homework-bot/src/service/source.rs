//! Homework source
//!
//! Fetches raw homework status responses for a time window.

use async_trait::async_trait;
use homework_client::{PracticumClient, Result};
use serde_json::Value;

/// Service trait for fetching homework statuses
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    /// Fetches the raw response for changes since `from_date`
    ///
    /// # Arguments
    /// * `from_date` - Unix time marking the start of the query window
    async fn fetch(&self, from_date: i64) -> Result<Value>;
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value> {
        self.homework_statuses(from_date).await
    }
}
