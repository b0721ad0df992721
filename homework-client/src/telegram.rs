//! Telegram Bot API

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ClientError, Result};

/// Default Telegram Bot API base URL
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// HTTP client for sending chat messages through a Telegram bot
#[derive(Clone)]
pub struct TelegramClient {
    /// Base URL of the Bot API (e.g., "https://api.telegram.org")
    base_url: String,
    /// Bot token
    token: String,
    /// HTTP client instance
    client: Client,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TelegramResponse {
    ok: bool,
    description: Option<String>,
}

impl TelegramClient {
    /// Create a new client for the public Bot API
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(TELEGRAM_API_URL, token)
    }

    /// Create a new client against a custom Bot API server
    pub fn with_base_url(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client: Client::new(),
        }
    }

    /// Get the Bot API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// Send a text message to a chat
    ///
    /// # Arguments
    /// * `chat_id` - Destination chat identifier
    /// * `text` - Message text, sent as plain text
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await
            .map_err(strip_url)?;

        let status = response.status();
        let body = response.text().await.map_err(strip_url)?;
        let parsed = serde_json::from_str::<TelegramResponse>(&body);

        if !status.is_success() {
            let message = parsed
                .ok()
                .and_then(|r| r.description)
                .unwrap_or(body);
            return Err(ClientError::unexpected_status(status.as_u16(), message));
        }

        let parsed = parsed
            .map_err(|e| ClientError::ParseError(format!("Invalid sendMessage response: {}", e)))?;
        if !parsed.ok {
            return Err(ClientError::Rejected(
                parsed.description.unwrap_or_else(|| "no description".to_string()),
            ));
        }

        Ok(())
    }
}

/// Drops the request URL from a transport error, since it embeds the bot token
fn strip_url(e: reqwest::Error) -> ClientError {
    ClientError::RequestFailed(e.without_url())
}

impl fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramClient")
            .field("base_url", &self.base_url)
            .field("token", &crate::redact(&self.token))
            .finish()
    }
}
