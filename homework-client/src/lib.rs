//! Homework HTTP Clients
//!
//! Thin, typed HTTP clients for the two services the homework bot talks to:
//! - [`PracticumClient`] fetches homework statuses from the review API
//! - [`TelegramClient`] delivers text messages through the Telegram Bot API
//!
//! # Example
//!
//! ```no_run
//! use homework_client::{PracticumClient, TelegramClient};
//!
//! #[tokio::main]
//! async fn main() -> homework_client::Result<()> {
//!     let practicum = PracticumClient::new(homework_client::PRACTICUM_ENDPOINT, "api-token");
//!     let response = practicum.homework_statuses(0).await?;
//!
//!     let telegram = TelegramClient::new("bot-token");
//!     telegram.send_message("12345", &response.to_string()).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
mod practicum;
mod telegram;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use practicum::{PRACTICUM_ENDPOINT, PracticumClient};
pub use telegram::{TELEGRAM_API_URL, TelegramClient};

/// Redacts a secret for `Debug` output, keeping only its length visible
fn redact(secret: &str) -> String {
    format!("<redacted:{}>", secret.len())
}
