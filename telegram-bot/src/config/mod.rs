//! Bot configuration: BaseConfig (Telegram + log) + AppExtensions (application settings).

mod base;
mod bot_config;
mod extensions;


pub use base::{BaseConfig, DEFAULT_LOG_FILE};
pub use bot_config::BotConfig;
pub use extensions::{AppExtensions, NoExtensions};
