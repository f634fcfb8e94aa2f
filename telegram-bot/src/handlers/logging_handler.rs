//! Logging handler: records each incoming message and how the chain answered it.

use crate::core::{Handler, HandlerResponse, Message, Result};
use async_trait::async_trait;
use tracing::info;

/// Logs the message on `before` and the final response on `after`. Never stops the chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            chars = message.content.chars().count(),
            "Incoming message"
        );
        Ok(true)
    }

    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        match response {
            HandlerResponse::Reply(reply) => info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                reply_kind = reply.kind(),
                reply_len = reply.len(),
                "Replied"
            ),
            HandlerResponse::Stop => {
                info!(user_id = message.user.id, chat_id = message.chat.id, "Stopped without reply")
            }
            HandlerResponse::Continue => {
                info!(user_id = message.user.id, chat_id = message.chat.id, "No handler answered")
            }
        }
        Ok(())
    }
}
