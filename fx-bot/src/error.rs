//! Application error kinds and their user-facing messages.

use fastforex_client::ProviderError;
use rate_chart::ChartError;
use thiserror::Error;

use crate::router::Intent;

/// Usage hint appended to format errors and sent for unrecognized input.
pub const USAGE: &str = "Try one of:\n\
    /convert USD EUR 100\n\
    /convert 100 USD to EUR\n\
    100 USD to EUR\n\
    /chart USD/EUR 30\n\
    /help";

#[derive(Error, Debug)]
pub enum FxError {
    /// The message could not be parsed; the string says what was wrong.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// The provider has no rate for this currency.
    #[error("unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error(transparent)]
    Provider(ProviderError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    /// No intent handler is registered for a parsed command.
    #[error("no handler for intent {0}")]
    Unrouted(Intent),
}

impl From<ProviderError> for FxError {
    fn from(e: ProviderError) -> Self {
        match e {
            ProviderError::MissingCurrency(code) => FxError::UnsupportedCurrency(code),
            other => FxError::Provider(other),
        }
    }
}

impl FxError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        FxError::InvalidFormat(reason.into())
    }

    /// Text sent to the user in place of the normal reply.
    pub fn user_message(&self) -> String {
        match self {
            FxError::InvalidFormat(reason) => {
                format!("Sorry, I couldn't read that: {}.\n\n{}", reason, USAGE)
            }
            FxError::UnsupportedCurrency(code) => format!(
                "Sorry, {} is not supported by the rate provider. Please try a different currency pair.",
                code
            ),
            FxError::Provider(_) => {
                "Sorry, exchange rates are unavailable right now. Please try again later.".to_string()
            }
            FxError::Chart(_) => {
                "Sorry, I couldn't draw that chart. Please try a different range.".to_string()
            }
            FxError::Unrouted(_) => "Sorry, something went wrong. Please use /help.".to_string(),
        }
    }

    /// Label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FxError::InvalidFormat(_) => "invalid_format",
            FxError::UnsupportedCurrency(_) => "unsupported_currency",
            FxError::Provider(_) => "provider",
            FxError::Chart(_) => "chart",
            FxError::Unrouted(_) => "unrouted",
        }
    }
}
