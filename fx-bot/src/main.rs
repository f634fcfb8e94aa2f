//! fx-bot: run the Telegram bot, or convert / chart once from the command line.

use anyhow::Result;
use clap::Parser;
use fx_bot::cli::{client_from_env, init_cli_tracing, run_chart, run_convert, Cli, Commands};
use fx_bot::{make_handler, FxConfig, COMMANDS};
use telegram_bot::run_bot;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run { token: None }) {
        Commands::Run { token } => {
            let config = FxConfig::load(token)?;
            run_bot(config, COMMANDS, make_handler).await
        }
        Commands::Convert {
            from,
            to,
            amount,
            precision,
        } => {
            init_cli_tracing();
            let client = client_from_env()?;
            println!("{}", run_convert(&client, &from, &to, &amount, precision).await?);
            Ok(())
        }
        Commands::Chart {
            from,
            to,
            days,
            output,
        } => {
            init_cli_tracing();
            let client = client_from_env()?;
            let caption = run_chart(&client, &from, &to, days, &output).await?;
            println!("Chart written to {}\n{}", output.display(), caption);
            Ok(())
        }
    }
}
