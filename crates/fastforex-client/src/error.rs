//! Provider error type.

use thiserror::Error;

/// Failure talking to the rate provider. Never carries the API key.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Non-2xx response; `message` is the provider's `error` field or a body excerpt.
    #[error("provider returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Connection, TLS or timeout failure.
    #[error("request to provider failed: {0}")]
    Transport(String),

    /// Body is not the expected JSON shape.
    #[error("malformed provider response: {0}")]
    Decode(String),

    /// 2xx body that carries an `error` field and no result.
    #[error("provider error: {0}")]
    Api(String),

    /// The body has no rate for the requested target currency.
    #[error("provider has no rate for {0}")]
    MissingCurrency(String),

    #[error("invalid provider configuration: {0}")]
    Config(String),
}

impl ProviderError {
    /// True when the provider does not know the requested currency.
    pub fn is_unsupported_currency(&self) -> bool {
        matches!(self, ProviderError::MissingCurrency(_))
    }
}
