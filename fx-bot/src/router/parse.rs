//! Message text to [`Command`].
//!
//! Tokens are split on whitespace and `/`, so `USD/EUR` and `USD EUR` read the same; the
//! filler word `to` and @mentions of other users are dropped. Codes are case-insensitive.

use fastforex_client::{CurrencyCode, RateResponse, MAX_RANGE_DAYS};
use std::fmt;
use telegram_bot::split_command;

use crate::error::FxError;
use crate::formatter::format_amount;

/// Largest amount accepted for conversion.
pub const MAX_AMOUNT: f64 = 1e15;

/// Smallest amount accepted for conversion; anything below prints as zero.
pub const MIN_AMOUNT: f64 = 1e-8;

/// What a message asks for. Also the key of the intent table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Convert,
    Chart,
    PickPair,
    PickTimeframe,
    Help,
    Start,
    Info,
    Unrecognized,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Convert => "convert",
            Intent::Chart => "chart",
            Intent::PickPair => "pick_pair",
            Intent::PickTimeframe => "pick_timeframe",
            Intent::Help => "help",
            Intent::Start => "start",
            Intent::Info => "info",
            Intent::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub source_currency: CurrencyCode,
    pub target_currency: CurrencyCode,
    /// Finite and greater than zero.
    pub amount: f64,
}

impl ConversionRequest {
    /// `amount` in the target currency at `rate`; `InvalidFormat` when the product is not finite.
    pub fn converted(&self, rate: &RateResponse) -> Result<f64, FxError> {
        let converted = rate.convert(self.amount);
        if !converted.is_finite() {
            return Err(FxError::invalid("the converted amount is too large"));
        }
        Ok(converted)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    pub base: CurrencyCode,
    pub target: CurrencyCode,
    /// In `1..=MAX_RANGE_DAYS`.
    pub days: u32,
}

/// A currency pair picked from the chart keyboard, still waiting for a number of days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairRequest {
    pub base: CurrencyCode,
    pub target: CurrencyCode,
}

/// A parsed message.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Convert(ConversionRequest),
    Chart(ChartRequest),
    /// Bare `/chart`: offer the common pairs as buttons.
    PickPair,
    /// A pair button was pressed: offer the timeframes.
    PickTimeframe(PairRequest),
    Help,
    Start,
    Info,
    Unrecognized,
}

impl Command {
    pub fn intent(&self) -> Intent {
        match self {
            Command::Convert(_) => Intent::Convert,
            Command::Chart(_) => Intent::Chart,
            Command::PickPair => Intent::PickPair,
            Command::PickTimeframe(_) => Intent::PickTimeframe,
            Command::Help => Intent::Help,
            Command::Start => Intent::Start,
            Command::Info => Intent::Info,
            Command::Unrecognized => Intent::Unrecognized,
        }
    }
}

/// Parses one message.
///
/// `Ok(None)` means the message is not for this bot: a command addressed to another bot
/// (`/convert@other_bot`), or group chatter that does not mention the bot. Text with no
/// number in it that is not a command is [`Command::Unrecognized`]; text that looks like
/// a conversion attempt reports why it failed.
pub fn parse_message(
    text: &str,
    bot_username: Option<&str>,
    default_days: u32,
    private_chat: bool,
) -> Result<Option<Command>, FxError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    if text.starts_with('/') {
        let Some(command) = split_command(text, bot_username) else {
            return Ok(None);
        };
        let parsed = match command.name.as_str() {
            "convert" => Command::Convert(parse_conversion(command.args)?),
            "chart" | "graph" if command.args.is_empty() => Command::PickPair,
            "chart" | "graph" => Command::Chart(parse_chart(command.args, default_days)?),
            "help" => Command::Help,
            "start" => Command::Start,
            "info" => Command::Info,
            _ => Command::Unrecognized,
        };
        return Ok(Some(parsed));
    }

    let text = match bot_username {
        Some(me) if telegram_bot::is_bot_mentioned(text, me) => telegram_bot::strip_mention(text, me),
        _ if private_chat => text.to_string(),
        _ => return Ok(None),
    };

    match parse_conversion(&text) {
        Ok(request) => Ok(Some(Command::Convert(request))),
        Err(_) if !tokens(&text).iter().any(|t| looks_numeric(t)) => {
            Ok(Some(Command::Unrecognized))
        }
        Err(e) => Err(e),
    }
}

fn tokens(args: &str) -> Vec<&str> {
    args.split(|c: char| c.is_whitespace() || c == '/')
        .filter(|t| !t.is_empty() && !t.eq_ignore_ascii_case("to") && !t.starts_with('@'))
        .collect()
}

fn looks_numeric(token: &str) -> bool {
    token
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
}

pub(super) fn parse_code(token: &str) -> Result<CurrencyCode, FxError> {
    token
        .parse()
        .map_err(|e: fastforex_client::CurrencyError| FxError::invalid(e.to_string()))
}

fn parse_amount(token: &str) -> Result<f64, FxError> {
    match token.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => {
            if (MIN_AMOUNT..=MAX_AMOUNT).contains(&amount) {
                Ok(amount)
            } else {
                Err(FxError::invalid(format!(
                    "amount must be between {} and {}",
                    format_amount(MIN_AMOUNT),
                    format_amount(MAX_AMOUNT)
                )))
            }
        }
        _ => Err(FxError::invalid(format!(
            "'{}' is not a positive amount",
            token
        ))),
    }
}

/// Accepts `CUR CUR AMOUNT` and `AMOUNT CUR CUR` (with `/` or `to` between the codes).
pub fn parse_conversion(args: &str) -> Result<ConversionRequest, FxError> {
    let tokens = tokens(args);
    let (amount, source, target) = match tokens.as_slice() {
        [] => return Err(FxError::invalid("missing currencies and amount")),
        [a, s, t] if looks_numeric(a) => (*a, *s, *t),
        [s, t, a] if looks_numeric(a) => (*a, *s, *t),
        [_, _, _] => return Err(FxError::invalid("missing amount")),
        t if !t.iter().any(|t| looks_numeric(t)) => {
            return Err(FxError::invalid("missing amount"))
        }
        _ => {
            return Err(FxError::invalid(
                "expected an amount and two currency codes",
            ))
        }
    };
    Ok(ConversionRequest {
        source_currency: parse_code(source)?,
        target_currency: parse_code(target)?,
        amount: parse_amount(amount)?,
    })
}

/// Accepts `CUR/CUR [days]` and `CUR CUR [days]`; `days` may carry a `d` suffix (`30d`).
pub fn parse_chart(args: &str, default_days: u32) -> Result<ChartRequest, FxError> {
    let tokens = tokens(args);
    let (base, target, days) = match tokens.as_slice() {
        [] => return Err(FxError::invalid("missing currency pair")),
        [b, t] => (*b, *t, None),
        [b, t, d] => (*b, *t, Some(*d)),
        _ => return Err(FxError::invalid("expected a currency pair and a number of days")),
    };
    let days = match days {
        None => default_days,
        Some(d) => parse_days(d)?,
    };
    Ok(ChartRequest {
        base: parse_code(base)?,
        target: parse_code(target)?,
        days,
    })
}

/// `30` or `30d`, in `1..=MAX_RANGE_DAYS`.
pub(super) fn parse_days(token: &str) -> Result<u32, FxError> {
    token
        .trim_end_matches(['d', 'D'])
        .parse::<u32>()
        .ok()
        .filter(|n| (1..=MAX_RANGE_DAYS).contains(n))
        .ok_or_else(|| FxError::invalid(format!("days must be between 1 and {}", MAX_RANGE_DAYS)))
}
