//! Dispatcher runner: converts teloxide messages and callback queries to core::Message and passes
//! them to the HandlerChain.

use crate::chain::HandlerChain;
use crate::core::{Message, ToCoreMessage};
use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{BotCommand, CallbackQuery};
use tracing::{debug, error, info, instrument, warn};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};

/// Publishes the command menu shown by Telegram clients. Each entry is `(command, description)`, command without `/`.
#[instrument(skip(bot, commands), fields(count = commands.len()))]
pub async fn register_commands(bot: &teloxide::Bot, commands: &[(&str, &str)]) -> Result<()> {
    let commands: Vec<BotCommand> = commands
        .iter()
        .map(|(command, description)| BotCommand::new(*command, *description))
        .collect();
    bot.set_my_commands(commands).await?;
    info!("Bot command menu registered");
    Ok(())
}

/// Starts the update dispatcher with the given teloxide Bot, HandlerChain, and bot_username cache.
///
/// Calls get_me() before starting and stores the username in `bot_username`. Text messages and
/// inline-keyboard button presses are converted to core::Message and run the chain to completion;
/// chain errors are logged and never stop the dispatcher. Other updates are ignored.
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_dispatcher(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before dispatch");
            }
        }
        Err(e) => warn!(error = %e, "getMe failed; commands addressed as /cmd@bot will not be checked"),
    }

    let schema = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback_query));

    Dispatcher::builder(bot, schema)
        .dependencies(dptree::deps![handler_chain])
        .default_handler(|_update| Box::pin(async {}))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

async fn on_message(msg: teloxide::types::Message, chain: HandlerChain) -> ResponseResult<()> {
    let core_msg = TelegramMessageWrapper(&msg).to_core();

    if msg.text().is_none() {
        debug!(
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            "Ignoring non-text message"
        );
        return Ok(());
    }

    info!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        message_content = %core_msg.content,
        "Received message"
    );
    run_chain(&chain, &core_msg).await;
    Ok(())
}

async fn on_callback_query(query: CallbackQuery, chain: HandlerChain) -> ResponseResult<()> {
    let core_msg = TelegramCallbackWrapper(&query).to_core();
    info!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        callback_data = %core_msg.content,
        "Received button press"
    );
    run_chain(&chain, &core_msg).await;
    Ok(())
}

async fn run_chain(chain: &HandlerChain, message: &Message) {
    if let Err(e) = chain.handle(message).await {
        error!(error = %e, user_id = message.user.id, "Handler chain failed");
    }
}
