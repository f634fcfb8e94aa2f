//! CLI parser and the one-shot `convert` / `chart` commands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fastforex_client::{DateRange, EnvFastForexConfig, FastForexClient, RateClient};
use rate_chart::{caption, render_line_chart, ChartStyle};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::DEFAULT_CHART_DAYS;
use crate::formatter::{format_conversion, format_rate, DEFAULT_PRECISION};
use crate::router::{parse_chart, parse_conversion};

#[derive(Parser)]
#[command(name = "fx-bot")]
#[command(about = "Currency conversion and exchange-rate chart bot for Telegram", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Defaults to `run`.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Convert an amount once and print the result (needs API_KEY).
    Convert {
        from: String,
        to: String,
        amount: String,
        #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
        precision: usize,
    },
    /// Render a rate chart to a PNG file (needs API_KEY).
    Chart {
        from: String,
        to: String,
        #[arg(short, long, default_value_t = DEFAULT_CHART_DAYS)]
        days: u32,
        #[arg(short, long, default_value = "chart.png")]
        output: PathBuf,
    },
}

/// Console logging for one-shot commands; `RUST_LOG` overrides the `warn` default.
pub fn init_cli_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        .with_target(false)
        .init();
}

/// FastForex client from API_KEY / FASTFOREX_* env vars.
pub fn client_from_env() -> Result<FastForexClient> {
    let config = EnvFastForexConfig::from_env()?;
    config.validate()?;
    FastForexClient::from_config(&config).context("Build FastForex client")
}

/// Output of `fx-bot convert`: the conversion line, the rate line and the provider's update time.
pub async fn run_convert(
    rates: &dyn RateClient,
    from: &str,
    to: &str,
    amount: &str,
    precision: usize,
) -> Result<String> {
    let request = parse_conversion(&format!("{} {} {}", from, to, amount))?;
    let rate = rates
        .fetch_one(request.source_currency, request.target_currency)
        .await?;
    request.converted(&rate)?;
    let mut out = format!(
        "{}\n{}",
        format_conversion(&request, &rate, precision),
        format_rate(&rate)
    );
    if let Some(updated) = rate.timestamp {
        out.push_str(&format!("\nUpdated: {}", updated));
    }
    Ok(out)
}

/// `fx-bot chart`: writes the PNG to `output` and returns the caption.
pub async fn run_chart(
    rates: &dyn RateClient,
    from: &str,
    to: &str,
    days: u32,
    output: &Path,
) -> Result<String> {
    let request = parse_chart(&format!("{} {} {}", from, to, days), DEFAULT_CHART_DAYS)?;
    let range = DateRange::ending_today(request.days).context("days out of range")?;
    let series = rates
        .time_series(request.base, request.target, range)
        .await?;
    let chart = render_line_chart(&series, &ChartStyle::default())?;
    std::fs::write(output, &chart.png)
        .with_context(|| format!("Write chart to {}", output.display()))?;
    info!(output = %output.display(), points = chart.points, "Chart written");
    Ok(caption(&series, request.days))
}
