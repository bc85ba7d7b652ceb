//! Mock implementation of [`summary_bot::Bot`] for integration tests.
//!
//! Records every `send_message` call so tests can assert on reply order and text without hitting Telegram.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use summary_bot::{Bot, Chat, RelayError, Result};

/// One recorded call to `send_message(chat, text)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRecord {
    pub chat_id: i64,
    pub text: String,
}

/// Mock Bot that records sends. When `fail` is set every send is recorded and then reported as failed.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentRecord>>,
    fail: bool,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|r| r.text).collect()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(SentRecord {
            chat_id: chat.id,
            text: text.to_string(),
        });
        if self.fail {
            return Err(RelayError::Bot("Forbidden: bot was blocked by the user".to_string()));
        }
        Ok(())
    }
}
