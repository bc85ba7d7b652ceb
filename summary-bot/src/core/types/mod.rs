//! Core types: user, chat, inbound message, handler response, and Handler trait.

mod chat;
mod handler;
mod message;
mod response;
mod user;

pub use chat::Chat;
pub use handler::{Handler, ToCoreUser, ToInboundMessage};
pub use message::InboundMessage;
pub use response::HandlerResponse;
pub use user::User;
