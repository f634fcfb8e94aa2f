//! FastForex configuration: trait and env-based implementation.

use anyhow::{Context, Result};
use std::env;

/// Default FastForex endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.fastforex.io";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Rate provider configuration interface.
pub trait FastForexConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn timeout_secs(&self) -> u64;
}

/// FastForex config loaded from environment variables.
#[derive(Clone)]
pub struct EnvFastForexConfig {
    /// API_KEY or FASTFOREX_API_KEY
    pub api_key: String,
    /// FASTFOREX_BASE_URL
    pub base_url: String,
    /// FASTFOREX_TIMEOUT_SECS
    pub timeout_secs: u64,
}

// Keeps the key out of `{:?}` output.
impl std::fmt::Debug for EnvFastForexConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvFastForexConfig")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl FastForexConfig for EnvFastForexConfig {
    fn api_key(&self) -> &str {
        &self.api_key
    }
    fn base_url(&self) -> &str {
        &self.base_url
    }
    fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

impl EnvFastForexConfig {
    /// Builds config with the given key; other fields default.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("API_KEY")
            .or_else(|_| env::var("FASTFOREX_API_KEY"))
            .context("API_KEY (or FASTFOREX_API_KEY) not set")?;
        let base_url =
            env::var("FASTFOREX_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout_secs = match env::var("FASTFOREX_TIMEOUT_SECS") {
            Ok(s) => s
                .trim()
                .parse()
                .with_context(|| format!("FASTFOREX_TIMEOUT_SECS is not a number: {}", s))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        Ok(Self {
            api_key,
            base_url,
            timeout_secs,
        })
    }

    /// Validate config (key non-empty, base_url a valid URL, timeout positive).
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("API_KEY is empty");
        }
        if reqwest::Url::parse(&self.base_url).is_err() {
            anyhow::bail!("FASTFOREX_BASE_URL is not a valid URL: {}", self.base_url);
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("FASTFOREX_TIMEOUT_SECS must be greater than 0");
        }
        Ok(())
    }
}
