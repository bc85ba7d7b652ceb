//! Outbound side of the chat transport.
//!
//! [`Bot`] is transport-agnostic; `telegram::TelegramBotAdapter` implements it via teloxide.

use async_trait::async_trait;

use crate::core::error::Result;
use crate::core::types::Chat;

/// Sends plain-text messages. Implementations map to a transport (e.g. Telegram); tests record calls.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
}
