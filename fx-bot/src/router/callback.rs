//! Data carried by chart keyboard buttons.
//!
//! A pair button sends `graph_usd/eur`; the timeframe buttons under it send
//! `timeframe_usd/eur_30`. Everything needed is in the data, so no per-user state is kept
//! between the two presses.

use fastforex_client::CurrencyCode;

use crate::error::FxError;

use super::parse::{parse_code, parse_days, ChartRequest, Command, PairRequest};

pub const PAIR_PREFIX: &str = "graph_";
pub const TIMEFRAME_PREFIX: &str = "timeframe_";

fn lower(code: CurrencyCode) -> String {
    code.as_str().to_ascii_lowercase()
}

/// Data of the button for `pair` written as `USD/EUR`.
pub fn pair_data(pair: &str) -> String {
    format!("{}{}", PAIR_PREFIX, pair.to_ascii_lowercase())
}

/// Data of the button charting `pair` over `days`.
pub fn timeframe_data(pair: &PairRequest, days: u32) -> String {
    format!(
        "{}{}/{}_{}",
        TIMEFRAME_PREFIX,
        lower(pair.base),
        lower(pair.target),
        days
    )
}

fn parse_pair(pair: &str) -> Result<PairRequest, FxError> {
    let (base, target) = pair
        .split_once('/')
        .ok_or_else(|| FxError::invalid("missing currency pair"))?;
    Ok(PairRequest {
        base: parse_code(base)?,
        target: parse_code(target)?,
    })
}

/// Parses the data of a pressed button. `Ok(None)` for data this bot never puts on a button.
pub fn parse_callback(data: &str) -> Result<Option<Command>, FxError> {
    let data = data.trim();
    if let Some(pair) = data.strip_prefix(PAIR_PREFIX) {
        return Ok(Some(Command::PickTimeframe(parse_pair(pair)?)));
    }
    if let Some(rest) = data.strip_prefix(TIMEFRAME_PREFIX) {
        let (pair, days) = rest
            .rsplit_once('_')
            .ok_or_else(|| FxError::invalid("missing number of days"))?;
        let pair = parse_pair(pair)?;
        return Ok(Some(Command::Chart(ChartRequest {
            base: pair.base,
            target: pair.target,
            days: parse_days(days)?,
        })));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(base: &str, target: &str) -> PairRequest {
        PairRequest {
            base: base.parse().unwrap(),
            target: target.parse().unwrap(),
        }
    }

    #[test]
    fn test_pair_button_round_trip() {
        assert_eq!(pair_data("USD/EUR"), "graph_usd/eur");
        assert_eq!(
            parse_callback("graph_usd/eur").unwrap(),
            Some(Command::PickTimeframe(pair("USD", "EUR")))
        );
    }

    #[test]
    fn test_timeframe_button_is_a_chart() {
        let data = timeframe_data(&pair("GBP", "JPY"), 30);
        assert_eq!(data, "timeframe_gbp/jpy_30");
        assert_eq!(
            parse_callback(&data).unwrap(),
            Some(Command::Chart(ChartRequest {
                base: "GBP".parse().unwrap(),
                target: "JPY".parse().unwrap(),
                days: 30,
            }))
        );
    }

    #[test]
    fn test_bad_callback_data() {
        assert_eq!(parse_callback("custom_graph_pair").unwrap(), None);
        assert_eq!(parse_callback("").unwrap(), None);
        assert!(matches!(
            parse_callback("graph_usd/xyz"),
            Err(FxError::InvalidFormat(reason)) if reason.contains("XYZ")
        ));
        assert!(matches!(
            parse_callback("timeframe_usd/eur_400"),
            Err(FxError::InvalidFormat(reason)) if reason.contains("between 1 and 365")
        ));
        assert!(matches!(
            parse_callback("timeframe_usd/eur"),
            Err(FxError::InvalidFormat(_))
        ));
        assert!(matches!(parse_callback("graph_usdeur"), Err(FxError::InvalidFormat(_))));
    }
}
