//! # fx-bot
//!
//! Telegram currency conversion and exchange-rate chart bot. Messages flow through the
//! framework's handler chain into [`CommandRouter`], which parses them (or the data of a pressed
//! keyboard button) into a [`Command`], dispatches through the [`IntentTable`] and replies with
//! text, a PNG chart or a keyboard.

pub mod assembly;
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod intents;
pub mod router;

pub use assembly::{build_intent_table, build_router, make_handler, COMMANDS};
pub use config::{FxConfig, FxExtensions, DEFAULT_CHART_DAYS};
pub use error::{FxError, USAGE};
pub use formatter::{
    chart_progress, format_amount, format_conversion, format_rate, DEFAULT_PRECISION,
};
pub use intents::{IntentHandler, IntentTable};
pub use router::{
    ChartRequest, Command, CommandRouter, ConversionRequest, Intent, PairRequest, MAX_AMOUNT,
};
