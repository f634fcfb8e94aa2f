use async_trait::async_trait;
use fastforex_client::{DateRange, RateClient};
use rate_chart::{caption, render_line_chart, ChartStyle};
use std::sync::Arc;
use telegram_bot::{Message, Reply};
use tracing::{info, instrument};

use crate::error::FxError;
use crate::router::Command;

use super::IntentHandler;

/// Fetches a time series ending today and replies with a PNG chart.
pub struct ChartIntent {
    rates: Arc<dyn RateClient>,
    style: ChartStyle,
}

impl ChartIntent {
    pub fn new(rates: Arc<dyn RateClient>) -> Self {
        Self::with_style(rates, ChartStyle::default())
    }

    pub fn with_style(rates: Arc<dyn RateClient>, style: ChartStyle) -> Self {
        Self { rates, style }
    }
}

#[async_trait]
impl IntentHandler for ChartIntent {
    #[instrument(skip_all, fields(user_id = message.user.id))]
    async fn handle(&self, command: &Command, message: &Message) -> Result<Reply, FxError> {
        let Command::Chart(request) = command else {
            return Err(FxError::Unrouted(command.intent()));
        };
        let range = DateRange::ending_today(request.days)
            .ok_or_else(|| FxError::invalid("days out of range"))?;
        let series = self
            .rates
            .time_series(request.base, request.target, range)
            .await?;
        let chart = render_line_chart(&series, &self.style)?;
        info!(
            base = %request.base,
            target = %request.target,
            days = request.days,
            points = chart.points,
            bytes = chart.png.len(),
            "Chart rendered"
        );
        Ok(Reply::Photo {
            caption: Some(caption(&series, request.days)),
            png: chart.png,
        })
    }
}
