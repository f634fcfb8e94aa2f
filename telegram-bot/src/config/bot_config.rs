//! BotConfig: BaseConfig + application extensions. Use load() for env-based loading.

use anyhow::Result;

use super::{AppExtensions, BaseConfig, NoExtensions};

/// Bot config: BaseConfig + extensions. Use BotConfig::load() for env-based loading.
#[derive(Debug, Clone)]
pub struct BotConfig<E = NoExtensions> {
    pub base: BaseConfig,
    pub extensions: E,
}

impl<E: AppExtensions> BotConfig<E> {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let extensions = E::from_env()?;
        Ok(Self { base, extensions })
    }

    /// Validate base and extensions. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.extensions.validate()
    }
}

impl<E> BotConfig<E> {
    pub fn new(base: BaseConfig, extensions: E) -> Self {
        Self { base, extensions }
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn extensions(&self) -> &E {
        &self.extensions
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
}
