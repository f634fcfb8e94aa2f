//! Text formatting for conversion and chart replies.

use fastforex_client::RateResponse;

use crate::router::{ChartRequest, ConversionRequest};

/// Decimal places of a converted amount unless configured.
pub const DEFAULT_PRECISION: usize = 2;

/// Largest accepted `CONVERT_PRECISION`.
pub const MAX_PRECISION: usize = 8;

/// Amount as typed by the user: at most [`MAX_PRECISION`] decimals, no trailing zeros (`100`, `12.5`).
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.prec$}", amount, prec = MAX_PRECISION);
    match fixed.split_once('.') {
        Some((whole, fraction)) => match fraction.trim_end_matches('0') {
            "" => whole.to_string(),
            fraction => format!("{}.{}", whole, fraction),
        },
        None => fixed,
    }
}

/// `100 USD = 92.00 EUR`; the result is rounded to `precision` decimals.
pub fn format_conversion(
    request: &ConversionRequest,
    rate: &RateResponse,
    precision: usize,
) -> String {
    format!(
        "{} {} = {:.prec$} {}",
        format_amount(request.amount),
        request.source_currency,
        rate.convert(request.amount),
        request.target_currency,
        prec = precision.min(MAX_PRECISION),
    )
}

/// `1 USD = 0.9200 EUR`
pub fn format_rate(rate: &RateResponse) -> String {
    format!("1 {} = {:.4} {}", rate.base, rate.rate, rate.target)
}

/// Notice sent while a chart is fetched and drawn.
pub fn chart_progress(request: &ChartRequest) -> String {
    format!(
        "Generating {}-day graph for {}/{}...\nThis may take a moment.",
        request.days, request.base, request.target
    )
}
