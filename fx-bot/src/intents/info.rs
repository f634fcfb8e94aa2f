//! Static replies: /help, /start, /info and the usage hint.

use async_trait::async_trait;
use telegram_bot::{Message, Reply};

use crate::error::{FxError, USAGE};
use crate::router::Command;

use super::IntentHandler;

pub const HELP_TEXT: &str = "Currency Converter Bot help\n\n\
Commands:\n\
/convert USD EUR 100 - convert an amount (also: /convert 100 USD to EUR)\n\
/chart USD/EUR [days] - exchange rate chart, 1 to 365 days (default 7); /graph works too\n\
/chart - pick a common pair and period from buttons\n\
/start - greeting\n\
/info - about this bot\n\
/help - this message\n\n\
You can also just type \"100 USD to EUR\" or \"100 USD/EUR\".\n\
Currency codes are 3-letter ISO codes such as USD, EUR, GBP or JPY.";

pub const INFO_TEXT: &str = "Currency Converter Bot\n\n\
Converts between currencies and draws exchange rate charts.\n\n\
Features:\n\
- Real-time conversion\n\
- Historical rate charts up to a year\n\
- 160 currencies, including metals such as XAU\n\n\
Exchange rates are provided by the FastForex API.";

pub struct HelpIntent;

#[async_trait]
impl IntentHandler for HelpIntent {
    async fn handle(&self, _command: &Command, _message: &Message) -> Result<Reply, FxError> {
        Ok(Reply::text(HELP_TEXT))
    }
}

/// Greets the sender by first name.
pub struct StartIntent;

#[async_trait]
impl IntentHandler for StartIntent {
    async fn handle(&self, _command: &Command, message: &Message) -> Result<Reply, FxError> {
        Ok(Reply::Text(format!(
            "Hello, {}! Welcome to the Currency Converter Bot.\n\n\
             I can convert currencies and show exchange rate charts.\n\n\
             Available commands:\n\
             /convert - convert currencies\n\
             /chart - view exchange rate charts\n\
             /help - show available commands\n\
             /info - about this bot\n\n\
             Let's get started: try /convert 100 USD to EUR",
            message.user.display_name()
        )))
    }
}

pub struct InfoIntent;

#[async_trait]
impl IntentHandler for InfoIntent {
    async fn handle(&self, _command: &Command, _message: &Message) -> Result<Reply, FxError> {
        Ok(Reply::text(INFO_TEXT))
    }
}

/// Reply for unknown commands and text the bot cannot read.
pub struct UsageIntent;

#[async_trait]
impl IntentHandler for UsageIntent {
    async fn handle(&self, _command: &Command, _message: &Message) -> Result<Reply, FxError> {
        Ok(Reply::Text(format!("I didn't understand that.\n\n{}", USAGE)))
    }
}
