//! Inline keyboards for picking a chart: the pair first, then the number of days.

use async_trait::async_trait;
use telegram_bot::{InlineButton, Message, Reply};

use crate::error::FxError;
use crate::router::{pair_data, timeframe_data, Command, PairRequest};

use super::IntentHandler;

/// Pairs offered by a bare `/chart`.
pub const COMMON_PAIRS: &[&str] = &[
    "USD/EUR", "EUR/USD", "USD/GBP", "GBP/USD", "GBP/EUR", "EUR/GBP", "USD/JPY", "EUR/JPY",
];

/// Timeframes offered once a pair is picked.
pub const TIMEFRAME_DAYS: &[u32] = &[7, 14, 30, 90];

pub const PAIR_MENU_TEXT: &str = "Choose a currency pair for the graph:\n\
(for any other pair send /chart BASE/TARGET [days])";

const BUTTONS_PER_ROW: usize = 2;

pub fn pair_keyboard() -> Vec<Vec<InlineButton>> {
    COMMON_PAIRS
        .chunks(BUTTONS_PER_ROW)
        .map(|row| {
            row.iter()
                .map(|pair| InlineButton::new(*pair, pair_data(pair)))
                .collect()
        })
        .collect()
}

pub fn timeframe_keyboard(pair: &PairRequest) -> Vec<Vec<InlineButton>> {
    TIMEFRAME_DAYS
        .chunks(BUTTONS_PER_ROW)
        .map(|row| {
            row.iter()
                .map(|days| {
                    InlineButton::new(format!("{} days", days), timeframe_data(pair, *days))
                })
                .collect()
        })
        .collect()
}

pub struct PairMenuIntent;

#[async_trait]
impl IntentHandler for PairMenuIntent {
    async fn handle(&self, _command: &Command, _message: &Message) -> Result<Reply, FxError> {
        Ok(Reply::Keyboard {
            text: PAIR_MENU_TEXT.to_string(),
            rows: pair_keyboard(),
        })
    }
}

pub struct TimeframeMenuIntent;

#[async_trait]
impl IntentHandler for TimeframeMenuIntent {
    async fn handle(&self, command: &Command, _message: &Message) -> Result<Reply, FxError> {
        let Command::PickTimeframe(pair) = command else {
            return Err(FxError::Unrouted(command.intent()));
        };
        Ok(Reply::Keyboard {
            text: format!("Select time period for {}/{} graph:", pair.base, pair.target),
            rows: timeframe_keyboard(pair),
        })
    }
}
