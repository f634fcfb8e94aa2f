//! Adapters from Telegram (teloxide) types to core types.

use crate::core::{Chat, Message, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

fn chat_kind(chat: &teloxide::types::Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else if chat.is_channel() {
        "channel"
    } else {
        "unknown"
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`]. Non-text messages get empty content.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let (content, message_type) = match self.0.text() {
            Some(text) => (text.to_string(), "text"),
            None => (String::new(), "other"),
        };
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or(User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: chat_kind(&self.0.chat).to_string(),
            },
            content,
            message_type: message_type.to_string(),
            created_at: self.0.date,
        }
    }
}

/// Wraps a teloxide CallbackQuery (a pressed inline button) for conversion to a callback [`Message`].
///
/// The chat is the one holding the keyboard; presses on keyboards of inline messages have none,
/// so the reply goes to the user's private chat. Buttons without data get empty content.
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreMessage for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> Message {
        let query = self.0;
        let user = TelegramUserWrapper(&query.from).to_core();
        let chat = match &query.message {
            Some(keyboard_message) => {
                let chat = keyboard_message.chat();
                Chat {
                    id: chat.id.0,
                    chat_type: chat_kind(chat).to_string(),
                }
            }
            None => Chat::private(user.id),
        };
        Message::callback(
            query.id.to_string(),
            user,
            chat,
            query.data.clone().unwrap_or_default(),
        )
    }
}
