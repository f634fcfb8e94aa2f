//! Wires config and transport components into the [`CommandRouter`].

use anyhow::{Context, Result};
use fastforex_client::{FastForexClient, RateClient};
use std::sync::Arc;
use telegram_bot::{BotComponents, Handler};
use tracing::info;

use crate::config::FxConfig;
use crate::intents::{
    ChartIntent, ConvertIntent, HelpIntent, InfoIntent, IntentTable, PairMenuIntent, StartIntent,
    TimeframeMenuIntent, UsageIntent,
};
use crate::router::{CommandRouter, Intent};

/// Command menu published to Telegram: `(command, description)`.
pub const COMMANDS: &[(&str, &str)] = &[
    ("convert", "Convert currencies: /convert USD EUR 100"),
    ("chart", "Rate chart: /chart USD/EUR 30, or /chart to pick a pair"),
    ("help", "How to use the bot"),
    ("info", "About this bot"),
    ("start", "Start the bot"),
];

/// The full intent table over `rates`.
pub fn build_intent_table(rates: Arc<dyn RateClient>, precision: usize) -> IntentTable {
    IntentTable::new()
        .register(
            Intent::Convert,
            Arc::new(ConvertIntent::new(rates.clone(), precision)),
        )
        .register(Intent::Chart, Arc::new(ChartIntent::new(rates)))
        .register(Intent::PickPair, Arc::new(PairMenuIntent))
        .register(Intent::PickTimeframe, Arc::new(TimeframeMenuIntent))
        .register(Intent::Help, Arc::new(HelpIntent))
        .register(Intent::Start, Arc::new(StartIntent))
        .register(Intent::Info, Arc::new(InfoIntent))
        .register(Intent::Unrecognized, Arc::new(UsageIntent))
}

/// Router over an explicit rate client; tests pass a mock here.
pub fn build_router(
    config: &FxConfig,
    components: BotComponents,
    rates: Arc<dyn RateClient>,
) -> CommandRouter {
    let ext = config.extensions();
    CommandRouter::new(
        build_intent_table(rates, ext.precision),
        components.bot,
        components.bot_username,
        ext.chart_default_days,
    )
}

/// Handler factory for [`telegram_bot::run_bot`]: FastForex client from config plus the router.
pub fn make_handler(config: &FxConfig, components: BotComponents) -> Result<Arc<dyn Handler>> {
    let fastforex = &config.extensions().fastforex;
    let client = FastForexClient::from_config(fastforex).context("Build FastForex client")?;
    info!(
        base_url = %client.base_url(),
        timeout_secs = fastforex.timeout_secs,
        "FastForex client ready"
    );
    Ok(Arc::new(build_router(config, components, Arc::new(client))))
}
