//! Logs each inbound message in before() and the final reply in after().

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::core::{Handler, HandlerResponse, InboundMessage, Result};

/// Logs each message in before() and the final response in after(); always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &InboundMessage) -> Result<bool> {
        info!(
            sender_id = message.sender.id,
            username = %message.sender.username.as_deref().unwrap_or("unknown"),
            chat_id = message.chat.id,
            received_at = %message.received_at,
            message_content = %message.text,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &InboundMessage, response: &HandlerResponse) -> Result<()> {
        let reply_len = match response {
            HandlerResponse::Reply(text) => Some(text.len()),
            HandlerResponse::Continue | HandlerResponse::Stop => None,
        };
        info!(
            message_id = %message.id,
            chat_id = message.chat.id,
            reply_len = ?reply_len,
            "Processed message"
        );
        Ok(())
    }
}
