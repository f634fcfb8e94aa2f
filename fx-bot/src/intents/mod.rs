//! Intent handlers and the intent table the router dispatches through.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use telegram_bot::{Message, Reply};

use crate::error::FxError;
use crate::router::{Command, Intent};

mod chart;
mod convert;
mod info;
mod menu;

pub use chart::ChartIntent;
pub use convert::ConvertIntent;
pub use info::{HelpIntent, InfoIntent, StartIntent, UsageIntent, HELP_TEXT, INFO_TEXT};
pub use menu::{
    pair_keyboard, timeframe_keyboard, PairMenuIntent, TimeframeMenuIntent, COMMON_PAIRS,
    PAIR_MENU_TEXT, TIMEFRAME_DAYS,
};

/// Produces the reply for one kind of [`Command`].
#[async_trait]
pub trait IntentHandler: Send + Sync {
    /// `command` is always of the intent this handler was registered for.
    async fn handle(&self, command: &Command, message: &Message) -> Result<Reply, FxError>;
}

/// Intent to handler, built once at startup.
#[derive(Clone, Default)]
pub struct IntentTable {
    handlers: HashMap<Intent, Arc<dyn IntentHandler>>,
}

impl IntentTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, intent: Intent, handler: Arc<dyn IntentHandler>) -> Self {
        self.handlers.insert(intent, handler);
        self
    }

    pub fn get(&self, intent: Intent) -> Option<&Arc<dyn IntentHandler>> {
        self.handlers.get(&intent)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
