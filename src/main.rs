use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use energy_price_report::{
    generate_report, parse_feed, Config, EnergyZeroClient, Locale, ParseMode, TelegramClient,
    TimeOfDay,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Posts tomorrow's energy prices to a Telegram chat.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Print the report instead of sending it
    #[arg(long)]
    dry_run: bool,

    /// Report language, overrides REPORT_LOCALE
    #[arg(long)]
    locale: Option<Locale>,

    /// Telegram parse mode the report is rendered for
    #[arg(long, default_value_t = ParseMode::Markdown)]
    parse_mode: ParseMode,

    /// Read a saved EnergyZero response instead of querying the API
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("energy_price_report=info")),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env().context("configuration error")?;
    let locale = cli.locale.unwrap_or(config.locale);

    let prices = match &cli.input {
        Some(path) => {
            let body = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            parse_feed(&body).context("parsing energy prices")?
        }
        None => EnergyZeroClient::with_base_url(config.energyzero_url.clone())
            .fetch_prices(Utc::now())
            .await
            .context("fetching energy prices")?,
    };

    let report = generate_report(&prices, TimeOfDay::now(), locale, cli.parse_mode)
        .context("generating report")?;

    if cli.dry_run {
        println!("{report}");
        return Ok(());
    }

    info!(chat_id = %config.chat_id, "posting energy report");

    let bot = TelegramClient::with_base_url(config.token.clone(), config.telegram_api_url.clone());
    bot.send_message(&config.chat_id, &report, cli.parse_mode)
        .await
        .context("sending report to telegram")?;

    Ok(())
}
