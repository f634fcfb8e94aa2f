//! Component factory: builds BotComponents from config. Isolates assembly logic from the runner.

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::config::BaseConfig;
use crate::core::Bot;
use crate::telegram::TelegramBotAdapter;

/// Transport dependencies handed to the application's handler factory.
#[derive(Clone)]
pub struct BotComponents {
    /// Raw teloxide bot, used by the dispatcher and for command registration.
    pub teloxide_bot: teloxide::Bot,
    /// Reply transport. Production: [`TelegramBotAdapter`]; tests may inject a recording bot.
    pub bot: Arc<dyn Bot>,
    /// Bot username from getMe, filled in before dispatch starts.
    pub bot_username: Arc<RwLock<Option<String>>>,
}

/// Builds the teloxide bot (pointed at TELEGRAM_API_URL when set).
pub fn build_teloxide_bot(base: &BaseConfig) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(base.bot_token.clone());
    match base.telegram_api_url {
        Some(ref url_str) => {
            let url = reqwest::Url::parse(url_str)
                .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", url_str))?;
            info!(url = %url_str, "Using custom Telegram API URL");
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Builds BotComponents. When `bot_override` is `Some`, replies go through it instead of Telegram.
#[instrument(skip(base, bot_override))]
pub fn build_bot_components(
    base: &BaseConfig,
    bot_override: Option<Arc<dyn Bot>>,
) -> Result<BotComponents> {
    let teloxide_bot = build_teloxide_bot(base)?;
    let bot = bot_override
        .unwrap_or_else(|| Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())));
    Ok(BotComponents {
        teloxide_bot,
        bot,
        bot_username: Arc::new(RwLock::new(None)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_components_default_api_url() {
        let base = BaseConfig::with_token("123:abc");
        let components = build_bot_components(&base, None).unwrap();
        assert_eq!(components.teloxide_bot.token(), "123:abc");
        assert_eq!(
            components.teloxide_bot.api_url().as_str(),
            "https://api.telegram.org/"
        );
    }

    #[test]
    fn test_build_components_custom_api_url() {
        let mut base = BaseConfig::with_token("123:abc");
        base.telegram_api_url = Some("http://127.0.0.1:9999".to_string());
        let components = build_bot_components(&base, None).unwrap();
        assert_eq!(
            components.teloxide_bot.api_url().as_str(),
            "http://127.0.0.1:9999/"
        );
    }

    #[test]
    fn test_build_components_invalid_api_url() {
        let mut base = BaseConfig::with_token("123:abc");
        base.telegram_api_url = Some("not a url".to_string());
        assert!(build_bot_components(&base, None).is_err());
    }
}
