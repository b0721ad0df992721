//! Chat notifier

use async_trait::async_trait;
use homework_client::{Result, TelegramClient};

/// Service trait for delivering text messages to a chat
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `text` to the chat identified by `chat_id`
    async fn notify(&self, chat_id: &str, text: &str) -> Result<()>;
}

#[async_trait]
impl Notifier for TelegramClient {
    async fn notify(&self, chat_id: &str, text: &str) -> Result<()> {
        self.send_message(chat_id, text).await
    }
}
