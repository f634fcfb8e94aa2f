//! App extensions trait: application-specific config loaded next to [`super::BaseConfig`].

use anyhow::Result;

/// Application extension config. Implement this trait to load and validate app settings from env.
pub trait AppExtensions: Send + Sync + Sized {
    /// Load from environment variables.
    fn from_env() -> Result<Self>;

    /// Validate loaded values. Default: always valid.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Extensions for a bot with no application settings.
#[derive(Debug, Clone, Default)]
pub struct NoExtensions;

impl AppExtensions for NoExtensions {
    fn from_env() -> Result<Self> {
        Ok(Self)
    }
}
