//! Summary handler: classifies the message, runs the sharing pipeline for links, and sends the replies.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::core::{Handler, HandlerResponse, InboundMessage, Result};
use crate::dispatch::{classify, Route};
use crate::pipeline::SharingPipeline;
use crate::reply::ReplyEmitter;

/// Terminal handler of the chain. Always ends the chain with `Reply(final_text)`.
///
/// **External interactions:** sharing service (via the pipeline), chat transport (via the emitter).
#[derive(Clone)]
pub struct SummaryHandler {
    pipeline: SharingPipeline,
    emitter: ReplyEmitter,
    /// Filled by the REPL runner from `getMe`; None until then.
    bot_username: Arc<RwLock<Option<String>>>,
}

impl SummaryHandler {
    pub fn new(
        pipeline: SharingPipeline,
        emitter: ReplyEmitter,
        bot_username: Arc<RwLock<Option<String>>>,
    ) -> Self {
        Self {
            pipeline,
            emitter,
            bot_username,
        }
    }
}

#[async_trait]
impl Handler for SummaryHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &InboundMessage) -> Result<HandlerResponse> {
        let route = {
            let bot_username = self.bot_username.read().await;
            classify(message, bot_username.as_deref())
        };
        info!(route = route.name(), "step: message classified");

        let text = match &route {
            Route::RunPipeline(request) => {
                let result = self
                    .pipeline
                    .execute(request, &message.chat, &self.emitter)
                    .await;
                self.emitter.emit_result(&message.chat, &result).await
            }
            Route::Greet | Route::Reject => self
                .emitter
                .emit_route(&message.chat, &route)
                .await
                .unwrap_or_default(),
        };

        Ok(HandlerResponse::Reply(text))
    }
}
