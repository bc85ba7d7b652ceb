//! Reply emitter: owns every user-visible sentence and is the only caller of [`Bot::send_message`].
//!
//! Texts depend only on the route or the failure kind, never on failure details; details stay in the log.

use std::sync::Arc;

use sharing_client::FailureKind;
use tracing::{error, info};

use crate::core::{Bot, Chat};
use crate::dispatch::Route;
use crate::pipeline::SharingResult;

pub const MSG_GREETING: &str = "Send me a link to an article!";
pub const MSG_ASK_FOR_LINK: &str = "Please send a link.";
pub const MSG_NO_TEXT_ON_PAGE: &str = "Could not find text on the page.";
pub const MSG_PAGE_UNAVAILABLE: &str = "Could not retrieve data from the page.";
pub const MSG_API_ERROR: &str = "Error calling the API.";
pub const MSG_GENERIC_ERROR: &str = "An error occurred while processing the request.";

/// One reply to send: destination chat and text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub chat: Chat,
    pub text: String,
}

/// Fixed reply for routes that do not run the pipeline.
pub fn route_text(route: &Route) -> Option<&'static str> {
    match route {
        Route::Greet => Some(MSG_GREETING),
        Route::Reject => Some(MSG_ASK_FOR_LINK),
        Route::RunPipeline(_) => None,
    }
}

/// Intermediate reply sent as soon as the sharing URL is known.
pub fn link_ready_text(sharing_url: &str) -> String {
    format!("Link to generated text: {}", sharing_url)
}

pub fn failure_text(kind: FailureKind) -> &'static str {
    match kind {
        FailureKind::ServiceRejected => MSG_API_ERROR,
        FailureKind::TransportError => MSG_GENERIC_ERROR,
        FailureKind::FetchFailed => MSG_PAGE_UNAVAILABLE,
        FailureKind::ExtractionFailed => MSG_NO_TEXT_ON_PAGE,
    }
}

/// Final reply for a pipeline result.
pub fn result_text(result: &SharingResult) -> String {
    match result {
        SharingResult::Success { summary_text, .. } => format!("Text:\n{}", summary_text),
        SharingResult::PartialSuccess { kind, .. } | SharingResult::Failure { kind, .. } => {
            failure_text(*kind).to_string()
        }
    }
}

/// Sends replies through the transport. Send failures are logged and dropped: there is no channel
/// left to report them through.
#[derive(Clone)]
pub struct ReplyEmitter {
    bot: Arc<dyn Bot>,
}

impl ReplyEmitter {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }

    /// Sends one message. A transport error is logged here and goes no further.
    pub async fn send(&self, outbound: &OutboundMessage) {
        match self.bot.send_message(&outbound.chat, &outbound.text).await {
            Ok(()) => {
                info!(chat_id = outbound.chat.id, reply_len = outbound.text.len(), "step: reply sent");
            }
            Err(e) => {
                error!(error = %e, chat_id = outbound.chat.id, "Failed to send reply");
            }
        }
    }

    /// Sends the fixed reply for Greet / Reject. Returns the text, or None for RunPipeline.
    pub async fn emit_route(&self, chat: &Chat, route: &Route) -> Option<String> {
        let text = route_text(route)?;
        self.send(&OutboundMessage {
            chat: chat.clone(),
            text: text.to_string(),
        })
        .await;
        Some(text.to_string())
    }

    pub async fn emit_link_ready(&self, chat: &Chat, sharing_url: &str) {
        self.send(&OutboundMessage {
            chat: chat.clone(),
            text: link_ready_text(sharing_url),
        })
        .await;
    }

    /// Sends the final reply for a pipeline result and returns its text.
    pub async fn emit_result(&self, chat: &Chat, result: &SharingResult) -> String {
        let text = result_text(result);
        self.send(&OutboundMessage {
            chat: chat.clone(),
            text: text.clone(),
        })
        .await;
        text
    }
}
