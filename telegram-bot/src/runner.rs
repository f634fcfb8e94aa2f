//! Bot entry points: init logging, validate config, build components and the handler chain, run the dispatcher.

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::chain::HandlerChain;
use crate::components::{build_bot_components, BotComponents};
use crate::config::BotConfig;
use crate::core::{init_tracing, Bot, Handler};
use crate::handlers::{CallbackAckHandler, LoggingHandler};
use crate::telegram::{register_commands, run_dispatcher};

/// Builds the chain every bot runs: logging, then callback acknowledgement through `bot`,
/// then the application handler.
pub fn build_handler_chain(handler: Arc<dyn Handler>, bot: Arc<dyn Bot>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CallbackAckHandler::new(bot)))
        .add_handler(handler)
}

/// Main entry: init logging, validate config, build components, create the handler via factory,
/// publish the command menu, then run the dispatcher.
///
/// `commands` is the `(command, description)` list shown in Telegram clients; failure to publish it is logged, not fatal.
#[instrument(skip(config, commands, make_handler))]
pub async fn run_bot<E, F>(
    config: BotConfig<E>,
    commands: &[(&str, &str)],
    make_handler: F,
) -> Result<()>
where
    E: crate::config::AppExtensions,
    F: FnOnce(&BotConfig<E>, BotComponents) -> Result<Arc<dyn Handler>>,
{
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(log_file = %config.log_file(), "Initializing bot");

    let components = build_bot_components(config.base(), None)?;
    let handler = make_handler(&config, components.clone())?;
    let handler_chain = build_handler_chain(handler, components.bot.clone());

    if !commands.is_empty() {
        if let Err(e) = register_commands(&components.teloxide_bot, commands).await {
            warn!(error = %e, "Failed to register bot commands");
        }
    }

    info!("Bot started successfully");

    run_dispatcher(
        components.teloxide_bot.clone(),
        handler_chain,
        components.bot_username.clone(),
    )
    .await
}

/// Builds components and the handler chain without logging init or the dispatcher.
/// Used by integration tests that inject a recording bot and drive the chain with fake messages.
pub fn build_only<E, F>(
    config: &BotConfig<E>,
    bot_override: Option<Arc<dyn Bot>>,
    make_handler: F,
) -> Result<HandlerChain>
where
    E: crate::config::AppExtensions,
    F: FnOnce(&BotConfig<E>, BotComponents) -> Result<Arc<dyn Handler>>,
{
    config.validate()?;
    let components = build_bot_components(config.base(), bot_override)?;
    let bot = components.bot.clone();
    let handler = make_handler(config, components)?;
    Ok(build_handler_chain(handler, bot))
}
