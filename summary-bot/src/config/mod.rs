//! Bot configuration: BaseConfig (Telegram + log) + SharingConfig (sharing service, delays, timeouts).

mod base;
mod bot_config;
mod sharing;


pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use sharing::SharingConfig;
