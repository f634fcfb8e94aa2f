//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; [`crate::telegram::TelegramBotAdapter`] implements it via teloxide.
//! Tests substitute a recording implementation.

use async_trait::async_trait;

use super::error::Result;
use super::types::{Chat, InlineButton, Message, Reply};

/// File name attached to photo uploads.
pub const PHOTO_FILE_NAME: &str = "chart.png";

/// Abstraction for sending text, photo and keyboard replies. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a PNG image with an optional caption to the given chat.
    async fn send_photo(&self, chat: &Chat, png: &[u8], caption: Option<&str>) -> Result<()>;

    /// Sends text with an inline keyboard; `rows` are laid out top to bottom.
    async fn send_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        rows: &[Vec<InlineButton>],
    ) -> Result<()>;

    /// Acknowledges a button press so the client stops showing its loading state.
    async fn answer_callback(&self, callback_id: &str) -> Result<()>;

    /// Sends `reply` to the chat the message came from.
    async fn reply_to(&self, message: &Message, reply: &Reply) -> Result<()> {
        match reply {
            Reply::Text(text) => self.send_message(&message.chat, text).await,
            Reply::Photo { png, caption } => {
                self.send_photo(&message.chat, png, caption.as_deref()).await
            }
            Reply::Keyboard { text, rows } => self.send_keyboard(&message.chat, text, rows).await,
        }
    }
}
