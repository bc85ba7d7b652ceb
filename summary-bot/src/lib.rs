//! # Summary bot
//!
//! Telegram bot that relays article links to the sharing service and replies with the generated
//! summary. Wires the dispatcher, the sharing pipeline and the reply emitter into a handler chain,
//! loads config from env and runs the REPL.

pub mod chain;
pub mod cli;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod handlers;
pub mod pipeline;
pub mod reply;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};

pub use crate::core::{
    init_tracing, Bot, Chat, Handler, HandlerResponse, InboundMessage, RelayError, Result,
    ToCoreUser, ToInboundMessage, User,
};

pub use chain::HandlerChain;
pub use config::{BaseConfig, BotConfig, SharingConfig};
pub use dispatch::{classify, Route, SharingRequest};
pub use handlers::{LoggingHandler, SummaryHandler};
pub use pipeline::{SharingPipeline, SharingResult};
pub use reply::{OutboundMessage, ReplyEmitter};
pub use runner::{build_handler_chain, run_bot};
pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};
