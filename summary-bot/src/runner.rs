use anyhow::Result;
use sharing_client::{mask_token, SharingClient};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::core::{init_tracing, Bot};
use crate::handlers::{LoggingHandler, SummaryHandler};
use crate::pipeline::SharingPipeline;
use crate::reply::ReplyEmitter;
use crate::telegram::{build_teloxide_bot, run_repl, TelegramBotAdapter};

/// Builds the handler chain: LoggingHandler, then SummaryHandler sending replies through `bot`.
/// `bot_username` is shared with the REPL runner, which fills it from `getMe`.
pub fn build_handler_chain(
    config: &BotConfig,
    bot: Arc<dyn Bot>,
    bot_username: Arc<RwLock<Option<String>>>,
) -> Result<HandlerChain> {
    let sharing = config.sharing();
    let client = SharingClient::new(
        sharing.api_url.clone(),
        sharing.oauth_token.clone(),
        sharing.http_timeout(),
    )?;
    let pipeline = SharingPipeline::new(Arc::new(client), sharing.settle_delay());
    let emitter = ReplyEmitter::new(bot);

    Ok(HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(SummaryHandler::new(pipeline, emitter, bot_username))))
}

/// Main entry: validate config, init logging, build the handler chain, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_dir(), config.log_file())?;

    info!(
        sharing_api_url = %config.sharing().api_url,
        oauth_token = %mask_token(&config.sharing().oauth_token),
        settle_delay_secs = config.sharing().settle_delay_secs,
        http_timeout_secs = config.sharing().http_timeout_secs,
        log_dir = %config.log_dir(),
        "Initializing bot"
    );

    let teloxide_bot = build_teloxide_bot(config.bot_token(), config.telegram_api_url());
    let bot_adapter: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let bot_username = Arc::new(RwLock::new(None));
    let handler_chain = build_handler_chain(&config, bot_adapter, bot_username.clone())?;

    info!("Bot started successfully");

    run_repl(teloxide_bot, handler_chain, bot_username).await
}
