//! Command router: parses each message or button press, dispatches it through the
//! [`IntentTable`], and delivers the reply (or the error's user message) through the [`Bot`].

use async_trait::async_trait;
use std::sync::Arc;
use telegram_bot::{Bot, Handler, HandlerResponse, Message, Reply};
use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

use crate::error::FxError;
use crate::formatter::chart_progress;
use crate::intents::IntentTable;

mod callback;
mod parse;

pub use callback::{pair_data, parse_callback, timeframe_data, PAIR_PREFIX, TIMEFRAME_PREFIX};
pub use parse::{
    parse_chart, parse_conversion, parse_message, ChartRequest, Command, ConversionRequest,
    Intent, PairRequest, MAX_AMOUNT, MIN_AMOUNT,
};

/// The application [`Handler`]: last in the chain, answers every message addressed to the bot.
#[derive(Clone)]
pub struct CommandRouter {
    table: IntentTable,
    bot: Arc<dyn Bot>,
    bot_username: Arc<RwLock<Option<String>>>,
    default_days: u32,
}

impl CommandRouter {
    pub fn new(
        table: IntentTable,
        bot: Arc<dyn Bot>,
        bot_username: Arc<RwLock<Option<String>>>,
        default_days: u32,
    ) -> Self {
        Self {
            table,
            bot,
            bot_username,
            default_days,
        }
    }

    /// Parses and runs `message`; `None` when the message is not for this bot.
    pub async fn route(&self, message: &Message) -> Option<Result<Reply, FxError>> {
        let parsed = if message.is_callback() {
            parse_callback(&message.content)
        } else {
            let username = self.bot_username.read().await.clone();
            parse_message(
                &message.content,
                username.as_deref(),
                self.default_days,
                message.chat.is_private(),
            )
        };
        let command = match parsed {
            Ok(Some(command)) => command,
            Ok(None) => return None,
            Err(e) => return Some(Err(e)),
        };

        let intent = command.intent();
        info!(intent = %intent, user_id = message.user.id, "Dispatching");
        let Some(handler) = self.table.get(intent) else {
            return Some(Err(FxError::Unrouted(intent)));
        };
        if let Command::Chart(request) = &command {
            // Fetch and render take a while; a lost notice does not stop the chart.
            if let Err(e) = self.bot.send_message(&message.chat, &chart_progress(request)).await {
                warn!(error = %e, "Failed to send chart progress notice");
            }
        }
        Some(handler.handle(&command, message).await)
    }
}

#[async_trait]
impl Handler for CommandRouter {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> telegram_bot::Result<HandlerResponse> {
        let Some(outcome) = self.route(message).await else {
            return Ok(HandlerResponse::Continue);
        };

        let reply = match outcome {
            Ok(reply) => reply,
            Err(e) => {
                match &e {
                    FxError::InvalidFormat(_) | FxError::UnsupportedCurrency(_) => {
                        warn!(kind = e.kind(), error = %e, "Request rejected")
                    }
                    _ => error!(kind = e.kind(), error = %e, "Request failed"),
                }
                Reply::Text(e.user_message())
            }
        };

        self.bot.reply_to(message, &reply).await?;
        info!(kind = reply.kind(), len = reply.len(), "Reply sent");
        Ok(HandlerResponse::Reply(reply))
    }
}
