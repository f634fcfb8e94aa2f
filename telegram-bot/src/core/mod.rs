//! Core types and traits: Handler, Bot, Message, HandlerResponse, Reply, error, logger.
//! Transport-agnostic; the teloxide side lives in [`crate::telegram`].

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{Bot, PHOTO_FILE_NAME};
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, InlineButton, Message, Reply, ToCoreMessage, ToCoreUser, User,
    CALLBACK_MESSAGE_TYPE,
};
