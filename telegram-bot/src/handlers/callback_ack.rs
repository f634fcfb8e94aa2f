//! Answers inline-keyboard button presses before the application sees them.

use crate::core::{Bot, Handler, Message, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Calls [`Bot::answer_callback`] in `before` for every callback message. A failed answer is
/// logged and the chain continues; plain messages pass through untouched.
#[derive(Clone)]
pub struct CallbackAckHandler {
    bot: Arc<dyn Bot>,
}

impl CallbackAckHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for CallbackAckHandler {
    async fn before(&self, message: &Message) -> Result<bool> {
        if !message.is_callback() {
            return Ok(true);
        }
        match self.bot.answer_callback(&message.id).await {
            Ok(()) => debug!(callback_id = %message.id, "Callback answered"),
            Err(e) => warn!(callback_id = %message.id, error = %e, "Failed to answer callback"),
        }
        Ok(true)
    }
}
