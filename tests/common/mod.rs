//! Shared helpers for integration tests: core message factory and a capturing mock Bot.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use cinebot::{Bot, Chat, Message, MessageDirection, User};

/// Builds an incoming core message with fixed user/chat ids and the given text.
pub fn make_message(text: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: User {
            id: 7,
            username: Some("tester".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 99,
            chat_type: "Private".to_string(),
        },
        content: text.to_string(),
        message_type: "text".to_string(),
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
        reply_to_message_id: None,
    }
}

/// Bot impl that records every outbound message instead of talking to Telegram.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<(i64, String)>>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// All (chat_id, text) pairs sent so far.
    pub fn sent(&self) -> Vec<(i64, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> cinebot::Result<()> {
        self.sent.lock().unwrap().push((chat.id, text.to_string()));
        Ok(())
    }
}
