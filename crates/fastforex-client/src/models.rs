//! Rate data returned by a [`crate::RateClient`], plus the FastForex wire format.

use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::currency::CurrencyCode;
use crate::error::ProviderError;

/// Date format used in provider requests and responses.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Longest range accepted for a time series, in days.
pub const MAX_RANGE_DAYS: u32 = 365;

/// Latest rate for one pair. `timestamp` is the provider's last update time when reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateResponse {
    pub base: CurrencyCode,
    pub target: CurrencyCode,
    pub rate: f64,
    pub timestamp: Option<NaiveDateTime>,
}

impl RateResponse {
    /// `amount` of base expressed in target, unrounded.
    pub fn convert(&self, amount: f64) -> f64 {
        amount * self.rate
    }
}

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// The `days` calendar days ending on `end` (inclusive). `None` unless `1 <= days <= MAX_RANGE_DAYS`.
    pub fn last_days(days: u32, end: NaiveDate) -> Option<Self> {
        if days == 0 || days > MAX_RANGE_DAYS {
            return None;
        }
        let start = end - Duration::days(i64::from(days) - 1);
        Some(Self { start, end })
    }

    /// [`DateRange::last_days`] ending today (UTC).
    pub fn ending_today(days: u32) -> Option<Self> {
        Self::last_days(days, Utc::now().date_naive())
    }

    /// Number of calendar days covered.
    pub fn days(&self) -> u32 {
        ((self.end - self.start).num_days() + 1).max(0) as u32
    }
}

/// One observation in a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatePoint {
    pub date: NaiveDate,
    pub rate: f64,
}

/// Rate observations for one pair, in chronological order with at most one point per date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalSeries {
    pub base: CurrencyCode,
    pub target: CurrencyCode,
    points: Vec<RatePoint>,
}

impl HistoricalSeries {
    /// Builds a series from unordered `(date, rate)` pairs; a later duplicate date wins.
    pub fn from_points(
        base: CurrencyCode,
        target: CurrencyCode,
        points: impl IntoIterator<Item = (NaiveDate, f64)>,
    ) -> Self {
        let sorted: BTreeMap<NaiveDate, f64> = points.into_iter().collect();
        Self {
            base,
            target,
            points: sorted
                .into_iter()
                .map(|(date, rate)| RatePoint { date, rate })
                .collect(),
        }
    }

    pub fn points(&self) -> &[RatePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&RatePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&RatePoint> {
        self.points.last()
    }

    pub fn min_rate(&self) -> Option<f64> {
        self.points.iter().map(|p| p.rate).reduce(f64::min)
    }

    pub fn max_rate(&self) -> Option<f64> {
        self.points.iter().map(|p| p.rate).reduce(f64::max)
    }
}

// --- FastForex wire format ---

/// `GET /fetch-one` body: `{"base":"USD","result":{"EUR":0.92},"updated":"2024-01-07 12:00:00","ms":3}`.
#[derive(Debug, Deserialize)]
pub(crate) struct FetchOneBody {
    #[serde(default)]
    pub result: Option<HashMap<String, f64>>,
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `GET /time-series` body. `results` is documented as `{CUR: {date: rate}}`; some responses are
/// keyed `{date: {CUR: rate}}`, so both are accepted.
#[derive(Debug, Deserialize)]
pub(crate) struct TimeSeriesBody {
    #[serde(default)]
    pub results: Option<HashMap<String, HashMap<String, f64>>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Error body returned with non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

/// Parses the provider's `updated` field (`YYYY-MM-DD HH:MM:SS`).
pub(crate) fn parse_updated(updated: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(updated.trim(), "%Y-%m-%d %H:%M:%S").ok()
}

fn parse_date(s: &str) -> Result<NaiveDate, ProviderError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| ProviderError::Decode(format!("bad date '{}': {}", s, e)))
}

fn check_rate(rate: f64) -> Result<f64, ProviderError> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(ProviderError::Decode(format!("non-positive rate {}", rate)));
    }
    Ok(rate)
}

fn looks_like_currency(key: &str) -> bool {
    key.len() == 3 && key.bytes().all(|b| b.is_ascii_uppercase())
}

impl FetchOneBody {
    pub(crate) fn into_rate(
        self,
        base: CurrencyCode,
        target: CurrencyCode,
    ) -> Result<RateResponse, ProviderError> {
        let result = match (self.result, self.error) {
            (Some(result), _) => result,
            (None, Some(error)) => return Err(ProviderError::Api(error)),
            (None, None) => return Err(ProviderError::Decode("missing 'result'".to_string())),
        };
        let rate = *result
            .get(target.as_str())
            .ok_or_else(|| ProviderError::MissingCurrency(target.to_string()))?;
        let rate = check_rate(rate)?;
        Ok(RateResponse {
            base,
            target,
            rate,
            timestamp: self.updated.as_deref().and_then(parse_updated),
        })
    }
}

impl TimeSeriesBody {
    pub(crate) fn into_series(
        self,
        base: CurrencyCode,
        target: CurrencyCode,
    ) -> Result<HistoricalSeries, ProviderError> {
        let mut results = match (self.results, self.error) {
            (Some(results), _) => results,
            (None, Some(error)) => return Err(ProviderError::Api(error)),
            (None, None) => return Err(ProviderError::Decode("missing 'results'".to_string())),
        };

        // {CUR: {date: rate}}
        if let Some(by_date) = results.remove(target.as_str()) {
            let points = by_date
                .into_iter()
                .map(|(date, rate)| Ok((parse_date(&date)?, check_rate(rate)?)))
                .collect::<Result<Vec<_>, ProviderError>>()?;
            return Ok(HistoricalSeries::from_points(base, target, points));
        }
        if !results.is_empty() && results.keys().all(|k| looks_like_currency(k)) {
            return Err(ProviderError::MissingCurrency(target.to_string()));
        }

        // {date: {CUR: rate}}
        let mut points = Vec::with_capacity(results.len());
        for (date, by_currency) in results {
            let date = parse_date(&date)?;
            if let Some(rate) = by_currency.get(target.as_str()) {
                points.push((date, check_rate(*rate)?));
            }
        }
        if points.is_empty() {
            return Err(ProviderError::MissingCurrency(target.to_string()));
        }
        Ok(HistoricalSeries::from_points(base, target, points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CurrencyCode {
        s.parse().unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_date_range_last_days_is_inclusive() {
        let range = DateRange::last_days(7, date("2024-01-07")).unwrap();
        assert_eq!(range.start, date("2024-01-01"));
        assert_eq!(range.end, date("2024-01-07"));
        assert_eq!(range.days(), 7);

        let single = DateRange::last_days(1, date("2024-01-07")).unwrap();
        assert_eq!(single.start, single.end);
        assert_eq!(single.days(), 1);
    }

    #[test]
    fn test_date_range_bounds() {
        assert!(DateRange::last_days(0, date("2024-01-07")).is_none());
        assert!(DateRange::last_days(MAX_RANGE_DAYS + 1, date("2024-01-07")).is_none());
        assert_eq!(
            DateRange::last_days(MAX_RANGE_DAYS, date("2024-12-31")).unwrap().days(),
            MAX_RANGE_DAYS
        );
    }

    #[test]
    fn test_series_sorted_and_deduplicated() {
        let series = HistoricalSeries::from_points(
            code("USD"),
            code("EUR"),
            vec![
                (date("2024-01-03"), 0.93),
                (date("2024-01-01"), 0.91),
                (date("2024-01-02"), 0.95),
                (date("2024-01-01"), 0.90),
            ],
        );
        let dates: Vec<_> = series.points().iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![date("2024-01-01"), date("2024-01-02"), date("2024-01-03")]);
        assert_eq!(series.first().unwrap().rate, 0.90);
        assert_eq!(series.last().unwrap().rate, 0.93);
        assert_eq!(series.min_rate(), Some(0.90));
        assert_eq!(series.max_rate(), Some(0.95));
    }

    #[test]
    fn test_fetch_one_body_parses_rate_and_timestamp() {
        let body: FetchOneBody = serde_json::from_str(
            r#"{"base":"USD","result":{"EUR":0.92},"updated":"2024-01-07 12:30:00","ms":3}"#,
        )
        .unwrap();
        let rate = body.into_rate(code("USD"), code("EUR")).unwrap();
        assert_eq!(rate.rate, 0.92);
        assert_eq!(
            rate.timestamp.unwrap().to_string(),
            "2024-01-07 12:30:00"
        );
        assert!((rate.convert(100.0) - 92.0).abs() < 1e-9);
    }

    #[test]
    fn test_fetch_one_body_missing_target() {
        let body: FetchOneBody =
            serde_json::from_str(r#"{"base":"USD","result":{"GBP":0.79}}"#).unwrap();
        let err = body.into_rate(code("USD"), code("EUR")).unwrap_err();
        assert!(err.is_unsupported_currency());
    }

    #[test]
    fn test_fetch_one_body_error_field() {
        let body: FetchOneBody = serde_json::from_str(r#"{"error":"Invalid API key"}"#).unwrap();
        assert!(matches!(
            body.into_rate(code("USD"), code("EUR")),
            Err(ProviderError::Api(msg)) if msg == "Invalid API key"
        ));
    }

    #[test]
    fn test_time_series_currency_keyed() {
        let body: TimeSeriesBody = serde_json::from_str(
            r#"{"base":"USD","results":{"EUR":{"2024-01-02":0.92,"2024-01-01":0.91}}}"#,
        )
        .unwrap();
        let series = body.into_series(code("USD"), code("EUR")).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.first().unwrap().date, date("2024-01-01"));
    }

    #[test]
    fn test_time_series_date_keyed() {
        let body: TimeSeriesBody = serde_json::from_str(
            r#"{"results":{"2024-01-02":{"EUR":0.92},"2024-01-01":{"EUR":0.91}}}"#,
        )
        .unwrap();
        let series = body.into_series(code("USD"), code("EUR")).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.last().unwrap().rate, 0.92);
    }

    #[test]
    fn test_time_series_missing_target() {
        let body: TimeSeriesBody =
            serde_json::from_str(r#"{"results":{"GBP":{"2024-01-01":0.79}}}"#).unwrap();
        assert!(body
            .into_series(code("USD"), code("EUR"))
            .unwrap_err()
            .is_unsupported_currency());
    }

    #[test]
    fn test_time_series_bad_date_is_decode_error() {
        let body: TimeSeriesBody =
            serde_json::from_str(r#"{"results":{"EUR":{"yesterday":0.91}}}"#).unwrap();
        assert!(matches!(
            body.into_series(code("USD"), code("EUR")),
            Err(ProviderError::Decode(_))
        ));
    }

    #[test]
    fn test_time_series_bad_date_key_is_decode_error() {
        let body: TimeSeriesBody =
            serde_json::from_str(r#"{"results":{"01/02/2024":{"EUR":0.92}}}"#).unwrap();
        match body.into_series(code("USD"), code("EUR")) {
            Err(ProviderError::Decode(msg)) => assert!(msg.contains("bad date '01/02/2024'")),
            other => panic!("expected Decode, got {:?}", other),
        }
    }

    #[test]
    fn test_time_series_dates_without_target() {
        let body: TimeSeriesBody =
            serde_json::from_str(r#"{"results":{"2024-01-01":{"GBP":0.79}}}"#).unwrap();
        assert!(body
            .into_series(code("USD"), code("EUR"))
            .unwrap_err()
            .is_unsupported_currency());
    }

    #[test]
    fn test_time_series_rejects_non_positive_points() {
        for body in [
            r#"{"results":{"EUR":{"2024-01-01":0.91,"2024-01-02":0.0}}}"#,
            r#"{"results":{"2024-01-01":{"EUR":-0.91}}}"#,
        ] {
            let body: TimeSeriesBody = serde_json::from_str(body).unwrap();
            assert!(matches!(
                body.into_series(code("USD"), code("EUR")),
                Err(ProviderError::Decode(msg)) if msg.contains("non-positive")
            ));
        }
    }
}
