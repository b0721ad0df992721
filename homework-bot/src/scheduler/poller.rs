//! Homework status poller
//!
//! Polls the review API for status changes and announces the latest one in
//! the configured chat. Runs one cycle at a time with a fixed pause between
//! cycles; a failed cycle is reported to the chat and retried with the same
//! window on the next cycle.

use anyhow::Result;
use chrono::Utc;
use homework_core::{check_response, parse_status};
use tokio::time::{self, Duration};
use tracing::{debug, error, info, warn};

use crate::scheduler::outcome::{CycleError, Outcome};
use crate::service::{HomeworkSource, Notifier};

/// Poller that owns the query cursor and drives the poll cycle
pub struct StatusPoller<S, N> {
    source: S,
    notifier: N,
    chat_id: String,
    retry_interval: Duration,
    /// Unix time marking the start of the next query window
    cursor: i64,
}

impl<S: HomeworkSource, N: Notifier> StatusPoller<S, N> {
    /// Creates a new poller with the cursor set to the current time
    pub fn new(source: S, notifier: N, chat_id: String, retry_interval: Duration) -> Self {
        Self {
            source,
            notifier,
            chat_id,
            retry_interval,
            cursor: Utc::now().timestamp(),
        }
    }

    /// Replaces the starting cursor
    #[allow(dead_code)]
    pub fn with_cursor(mut self, cursor: i64) -> Self {
        self.cursor = cursor;
        self
    }

    /// Start of the next query window
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Starts the polling loop
    ///
    /// Never returns under normal operation; the process is stopped externally.
    pub async fn run(&mut self) -> Result<()> {
        info!(
            "Starting homework poller (interval: {:?}, from_date: {})",
            self.retry_interval,
            self.cursor()
        );

        loop {
            match self.run_cycle().await {
                Outcome::Notified => info!("Cursor advanced to {}", self.cursor()),
                Outcome::NoChange => debug!("Nothing to announce"),
                Outcome::Failed(e) => {
                    debug!("Cycle failed, window from {} will be retried: {}", self.cursor, e)
                }
            }

            time::sleep(self.retry_interval).await;
        }
    }

    /// Performs a single poll cycle and reports any failure to the chat
    pub async fn run_cycle(&mut self) -> Outcome {
        match self.poll_once().await {
            Ok(outcome) => outcome,
            Err(e) => {
                let message = format!("Program failure: {}", e);
                if e.is_transient() {
                    warn!(error = ?e, "{}", message);
                } else {
                    error!(error = ?e, "{}", message);
                }

                if let Err(alert_err) = self.send_message(&message).await {
                    error!("Failed to deliver failure alert: {}", alert_err);
                }

                Outcome::Failed(e)
            }
        }
    }

    async fn poll_once(&mut self) -> std::result::Result<Outcome, CycleError> {
        let response = self.source.fetch(self.cursor).await?;
        let homeworks = check_response(&response)?;

        // Only the most recent change in the window is announced
        let Some(latest) = homeworks.first() else {
            debug!("Homework status has not changed");
            return Ok(Outcome::NoChange);
        };

        let message = parse_status(latest)?;
        self.send_message(&message)
            .await
            .map_err(CycleError::Notify)?;

        self.cursor = self.cursor.max(Utc::now().timestamp());
        Ok(Outcome::Notified)
    }

    async fn send_message(&self, text: &str) -> homework_client::Result<()> {
        match self.notifier.notify(&self.chat_id, text).await {
            Ok(()) => {
                info!("Message sent to chat {}", self.chat_id);
                Ok(())
            }
            Err(e) => {
                error!(error = ?e, "Failed to send message to chat {}: {}", self.chat_id, e);
                Err(e)
            }
        }
    }
}
