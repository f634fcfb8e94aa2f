//! Application config: FastForex access plus reply settings, loaded next to the bot's [`BaseConfig`].
//!
//! [`BaseConfig`]: telegram_bot::BaseConfig

use anyhow::{Context, Result};
use fastforex_client::{EnvFastForexConfig, MAX_RANGE_DAYS};
use std::env;
use telegram_bot::{AppExtensions, BotConfig};

use crate::formatter::{DEFAULT_PRECISION, MAX_PRECISION};

/// Default chart range when `/chart` is given no day count.
pub const DEFAULT_CHART_DAYS: u32 = 7;

/// Full bot config.
pub type FxConfig = BotConfig<FxExtensions>;

#[derive(Debug, Clone)]
pub struct FxExtensions {
    pub fastforex: EnvFastForexConfig,
    /// CONVERT_PRECISION
    pub precision: usize,
    /// CHART_DEFAULT_DAYS
    pub chart_default_days: u32,
}

impl FxExtensions {
    /// Extensions with the given API key; other fields default.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            fastforex: EnvFastForexConfig::with_api_key(api_key),
            precision: DEFAULT_PRECISION,
            chart_default_days: DEFAULT_CHART_DAYS,
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(s) => s
            .trim()
            .parse()
            .ok()
            .with_context(|| format!("{} is not a valid number: {}", name, s)),
        Err(_) => Ok(default),
    }
}

impl AppExtensions for FxExtensions {
    fn from_env() -> Result<Self> {
        Ok(Self {
            fastforex: EnvFastForexConfig::from_env()?,
            precision: parse_env("CONVERT_PRECISION", DEFAULT_PRECISION)?,
            chart_default_days: parse_env("CHART_DEFAULT_DAYS", DEFAULT_CHART_DAYS)?,
        })
    }

    fn validate(&self) -> Result<()> {
        self.fastforex.validate()?;
        if self.precision > MAX_PRECISION {
            anyhow::bail!(
                "CONVERT_PRECISION must be at most {}, got {}",
                MAX_PRECISION,
                self.precision
            );
        }
        if !(1..=MAX_RANGE_DAYS).contains(&self.chart_default_days) {
            anyhow::bail!(
                "CHART_DEFAULT_DAYS must be between 1 and {}, got {}",
                MAX_RANGE_DAYS,
                self.chart_default_days
            );
        }
        Ok(())
    }
}
