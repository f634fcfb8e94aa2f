//! # Rate client
//!
//! Defines the [`RateClient`] trait and a FastForex implementation ([`FastForexClient`]).
//! Transport-agnostic; the bot's intent handlers only see the trait.

use async_trait::async_trait;

mod client;
mod config;
mod currency;
mod error;
mod models;

pub use client::FastForexClient;
pub use config::{EnvFastForexConfig, FastForexConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use currency::{CurrencyCode, CurrencyError, KNOWN_CURRENCIES};
pub use error::ProviderError;
pub use models::{
    DateRange, HistoricalSeries, RatePoint, RateResponse, DATE_FORMAT, MAX_RANGE_DAYS,
};

/// Exchange-rate source.
#[async_trait]
pub trait RateClient: Send + Sync {
    /// Latest rate from `base` to `target`.
    async fn fetch_one(
        &self,
        base: CurrencyCode,
        target: CurrencyCode,
    ) -> Result<RateResponse, ProviderError>;

    /// Daily rates from `base` to `target` over `range`, oldest first.
    async fn time_series(
        &self,
        base: CurrencyCode,
        target: CurrencyCode,
        range: DateRange,
    ) -> Result<HistoricalSeries, ProviderError>;
}
