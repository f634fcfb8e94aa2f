//! FastForex REST implementation of [`RateClient`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::config::{FastForexConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::currency::CurrencyCode;
use crate::error::ProviderError;
use crate::models::{
    DateRange, ErrorBody, FetchOneBody, HistoricalSeries, RateResponse, TimeSeriesBody,
    DATE_FORMAT,
};
use crate::RateClient;

/// Longest body excerpt carried in a [`ProviderError::Status`].
const MAX_ERROR_EXCERPT: usize = 200;

/// FastForex HTTP client. One GET per call; no retries.
#[derive(Clone)]
pub struct FastForexClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FastForexClient {
    /// Client against the public endpoint with the default timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ProviderError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS)
    }

    /// Client against a custom endpoint (proxies, tests).
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self, ProviderError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url)
            .map_err(|e| ProviderError::Config(format!("invalid base url '{}': {}", base_url, e)))?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ProviderError::Config(e.without_url().to_string()))?;
        Ok(Self {
            http,
            base_url,
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &dyn FastForexConfig) -> Result<Self, ProviderError> {
        Self::with_base_url(config.api_key(), config.base_url(), config.timeout_secs())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}/{path}` with `query` plus the key, decoded as `T`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(path = %path, "Calling rate provider");

        let response = self
            .http
            .get(&url)
            .query(query)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.without_url().to_string()))?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ErrorBody>(&body) {
                Ok(err) => err.error,
                Err(_) => body.chars().take(MAX_ERROR_EXCERPT).collect(),
            };
            warn!(path = %path, status = status.as_u16(), "Rate provider returned error status");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))
    }
}

#[async_trait]
impl RateClient for FastForexClient {
    #[instrument(skip_all, fields(base = %base, target = %target))]
    async fn fetch_one(
        &self,
        base: CurrencyCode,
        target: CurrencyCode,
    ) -> Result<RateResponse, ProviderError> {
        let body: FetchOneBody = self
            .get_json(
                "fetch-one",
                &[("from", base.to_string()), ("to", target.to_string())],
            )
            .await?;
        let rate = body.into_rate(base, target)?;
        debug!(rate = rate.rate, "Fetched rate");
        Ok(rate)
    }

    #[instrument(skip_all, fields(base = %base, target = %target, start = %range.start, end = %range.end))]
    async fn time_series(
        &self,
        base: CurrencyCode,
        target: CurrencyCode,
        range: DateRange,
    ) -> Result<HistoricalSeries, ProviderError> {
        let body: TimeSeriesBody = self
            .get_json(
                "time-series",
                &[
                    ("from", base.to_string()),
                    ("to", target.to_string()),
                    ("start", range.start.format(DATE_FORMAT).to_string()),
                    ("end", range.end.format(DATE_FORMAT).to_string()),
                ],
            )
            .await?;
        let series = body.into_series(base, target)?;
        debug!(points = series.len(), "Fetched time series");
        Ok(series)
    }
}
