//! Core types: user, chat, message, handler response, reply, and Handler trait.

mod chat;
mod handler;
mod message;
mod response;
mod user;

pub use chat::Chat;
pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use message::{Message, CALLBACK_MESSAGE_TYPE};
pub use response::{HandlerResponse, InlineButton, Reply};
pub use user::User;
