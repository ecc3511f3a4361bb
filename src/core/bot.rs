//! Outbound message transport trait. Production code sends via Telegram; tests substitute a capturing mock.

use async_trait::async_trait;

use super::error::Result;
use super::types::{Chat, Message};

/// Sends messages back to a chat. Handlers depend on this trait, not on teloxide.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends `text` to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends `text` to the chat the message came from.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}
