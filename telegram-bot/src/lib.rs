//! # Telegram bot framework
//!
//! Transport-agnostic core (Handler, Bot, Message, Reply), the handler chain, the teloxide layer
//! (adapters, reply transport, update dispatcher), base config with application extensions, and logging.
//! Applications supply one [`Handler`] and get logging, callback acknowledgement, config validation
//! and the dispatcher for free.

pub mod chain;
pub mod command;
pub mod components;
pub mod config;
pub mod core;
pub mod handlers;
pub mod runner;
pub mod telegram;

pub use core::{
    init_tracing, Bot, BotError, Chat, Handler, HandlerResponse, InlineButton, Message, Reply,
    Result, ToCoreMessage, ToCoreUser, User, CALLBACK_MESSAGE_TYPE, PHOTO_FILE_NAME,
};

pub use chain::HandlerChain;
pub use command::{is_bot_mentioned, split_command, strip_mention, SlashCommand};
pub use components::{build_bot_components, build_teloxide_bot, BotComponents};
pub use config::{AppExtensions, BaseConfig, BotConfig, NoExtensions};
pub use handlers::{CallbackAckHandler, LoggingHandler};
pub use runner::{build_handler_chain, build_only, run_bot};
pub use telegram::{
    register_commands, run_dispatcher, TelegramBotAdapter, TelegramCallbackWrapper,
    TelegramMessageWrapper, TelegramUserWrapper,
};
