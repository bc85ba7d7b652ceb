//! Core types and traits: Handler, Bot, InboundMessage, HandlerResponse, error, logger.
//! Transport-agnostic; the telegram module adapts teloxide to these types.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{RelayError, Result};
pub use logger::{build_file_appender, init_tracing, LOG_RETENTION_FILES};
pub use types::{Chat, Handler, HandlerResponse, InboundMessage, ToCoreUser, ToInboundMessage, User};
