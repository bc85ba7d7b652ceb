//! REPL runner: converts teloxide messages to [`InboundMessage`](crate::core::InboundMessage) and passes
//! them to the HandlerChain, one spawned task per message.

use crate::chain::HandlerChain;
use crate::core::ToInboundMessage;
use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tokio::sync::RwLock;
use tracing::{error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Starts the long-polling REPL with the given teloxide Bot and HandlerChain.
/// Calls `getMe` first and stores the bot's username in `bot_username` for start-command matching.
/// Each text message runs the chain in its own task so a slow or failing request never holds up the
/// next update; non-text messages are logged and dropped.
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<RwLock<Option<String>>>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            info!(
                username = %me.user.username.as_deref().unwrap_or("unknown"),
                "Connected to Telegram"
            );
            *bot_username.write().await = me.user.username.clone();
        }
        Err(e) => error!(error = %e, "getMe failed; starting polling anyway"),
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let Some(inbound) = TelegramMessageWrapper(&msg).to_inbound() else {
                info!(chat_id = msg.chat.id.0, "Received non-text message, ignored");
                return Ok(());
            };

            tokio::spawn(async move {
                if let Err(e) = chain.handle(&inbound).await {
                    error!(error = %e, chat_id = inbound.chat.id, "Handler chain failed");
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
