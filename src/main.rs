use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use ynab_risk::config::{self, parse_today, Settings, DEFAULT_API_BASE, DEFAULT_BUDGET_ID};
use ynab_risk::display::{format_report, DisplayOptions};
use ynab_risk::export::{export_json, export_risk_csv, export_yaml};
use ynab_risk::forecast::Forecast;
use ynab_risk::logging;
use ynab_risk::models::{WindowSet, DEFAULT_CURRENCY_SYMBOL};
use ynab_risk::ynab::{BudgetSource, Snapshot, YnabClient};

#[derive(Parser)]
#[command(
    name = "ynab-risk",
    version,
    about = "Flag YNAB accounts that may go negative soon.",
    long_about = "Projects each on-budget cash account's balance across the scheduled \
                  transactions in one or more day windows, lists the accounts that \
                  would drop below zero, and suggests transfers from accounts with \
                  spare cash. Nothing in the budget is changed."
)]
struct Cli {
    /// YNAB personal access token
    #[arg(long, env = "YNAB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Budget ID to check
    #[arg(long, env = "YNAB_BUDGET_ID", default_value = DEFAULT_BUDGET_ID)]
    budget_id: String,

    /// Comma-separated day windows to evaluate
    #[arg(short, long, default_value = "3,7,30")]
    windows: String,

    /// YNAB API root URL
    #[arg(long, env = "YNAB_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Symbol printed in front of amounts
    #[arg(long, default_value = DEFAULT_CURRENCY_SYMBOL)]
    currency_symbol: String,

    /// Project from this date instead of today (YYYY-MM-DD)
    #[arg(long)]
    today: Option<String>,

    /// Read accounts and scheduled transactions from a snapshot file
    #[arg(long, value_name = "PATH", conflicts_with = "save_snapshot")]
    snapshot: Option<PathBuf>,

    /// Save the fetched data to a snapshot file
    #[arg(long, value_name = "PATH")]
    save_snapshot: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Never color amounts
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Yaml,
    Csv,
}

fn main() -> Result<()> {
    config::load_dotenv(config::DOTENV_PATH)?;
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    // Reject bad windows before anything is fetched
    let windows = WindowSet::parse(&cli.windows)
        .with_context(|| format!("Invalid --windows value: {}", cli.windows))?;
    let today = parse_today(cli.today.as_deref())?;

    let settings = Settings {
        budget_id: cli.budget_id,
        currency_symbol: cli.currency_symbol,
        windows,
        today,
        ..Settings::default()
    }
    .with_token(cli.token)
    .with_api_base(cli.api_base);

    let snapshot = match &cli.snapshot {
        Some(path) => Snapshot::load(path)?,
        None => {
            let client = YnabClient::new(&settings)?;
            Snapshot::capture(&client).context("Failed to fetch budget data")?
        }
    };
    if let Some(path) = &cli.save_snapshot {
        snapshot.save(path)?;
        tracing::info!(path = %path.display(), "snapshot saved");
    }

    let accounts = snapshot.accounts()?;
    let scheduled = snapshot.scheduled_transactions()?;
    let report = Forecast::run(&accounts, &scheduled, &settings.windows, settings.today);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Table => {
            let options = DisplayOptions {
                currency_symbol: settings.currency_symbol.clone(),
                color: !cli.no_color && out.is_terminal(),
            };
            write!(out, "{}", format_report(&report, &options))?;
        }
        OutputFormat::Json => export_json(&report, &mut out)?,
        OutputFormat::Yaml => export_yaml(&report, &mut out)?,
        OutputFormat::Csv => export_risk_csv(&report, &mut out)?,
    }
    out.flush()?;

    Ok(())
}
