//! Error type for the bot core.

use thiserror::Error;

/// Framework error. Reply delivery is the only fallible framework call a handler makes.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Failed to send reply: {0}")]
    Bot(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
