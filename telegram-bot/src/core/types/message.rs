//! Message type for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// `message_type` of a pressed inline-keyboard button; `id` is then the callback query id
/// and `content` the button's data.
pub const CALLBACK_MESSAGE_TYPE: &str = "callback";

/// A single chat message with user, chat and text content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub message_type: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Builds an incoming text message; used by tests.
    pub fn incoming_text(user: User, chat: Chat, content: impl Into<String>) -> Self {
        Self {
            id: "0".to_string(),
            user,
            chat,
            content: content.into(),
            message_type: "text".to_string(),
            created_at: Utc::now(),
        }
    }

    /// Builds a button press carrying `data` from callback query `callback_id`.
    pub fn callback(
        callback_id: impl Into<String>,
        user: User,
        chat: Chat,
        data: impl Into<String>,
    ) -> Self {
        Self {
            id: callback_id.into(),
            user,
            chat,
            content: data.into(),
            message_type: CALLBACK_MESSAGE_TYPE.to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn is_callback(&self) -> bool {
        self.message_type == CALLBACK_MESSAGE_TYPE
    }
}
