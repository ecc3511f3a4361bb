//! Handler that logs every inbound message in before(); always continues.

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::core::{Handler, Message, Result};

/// Logs user, chat, and content length for each inbound message.
#[derive(Clone, Default)]
pub struct LoggingHandler;

impl LoggingHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            content_len = message.content.len(),
            "step: LoggingHandler inbound message"
        );
        Ok(true)
    }
}
