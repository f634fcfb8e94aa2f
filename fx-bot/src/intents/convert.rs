use async_trait::async_trait;
use fastforex_client::RateClient;
use std::sync::Arc;
use telegram_bot::{Message, Reply};
use tracing::{info, instrument};

use crate::error::FxError;
use crate::formatter::format_conversion;
use crate::router::{Command, Intent};

use super::IntentHandler;

/// Fetches the latest rate and replies with the converted amount.
pub struct ConvertIntent {
    rates: Arc<dyn RateClient>,
    precision: usize,
}

impl ConvertIntent {
    pub fn new(rates: Arc<dyn RateClient>, precision: usize) -> Self {
        Self { rates, precision }
    }
}

#[async_trait]
impl IntentHandler for ConvertIntent {
    #[instrument(skip_all, fields(user_id = message.user.id))]
    async fn handle(&self, command: &Command, message: &Message) -> Result<Reply, FxError> {
        let Command::Convert(request) = command else {
            return Err(FxError::Unrouted(command.intent()));
        };
        let rate = self
            .rates
            .fetch_one(request.source_currency, request.target_currency)
            .await?;
        request.converted(&rate)?;
        let text = format_conversion(request, &rate, self.precision);
        info!(
            base = %request.source_currency,
            target = %request.target_currency,
            amount = request.amount,
            rate = rate.rate,
            intent = %Intent::Convert,
            "Conversion done"
        );
        Ok(Reply::Text(text))
    }
}
