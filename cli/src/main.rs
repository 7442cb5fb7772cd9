use anyhow::Result;
use clap::Parser;
use eq_analytics::{beta_var_report, return_profile, BetaVarReport};
use eq_feed::{ChartClient, CsvHistory, FeedError, FeedResult, HistorySource, ProviderConfig};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

mod config;
mod report;

use config::{BetaSection, Config};

#[derive(Parser, Debug)]
#[clap(
    name = "riskscan",
    about = "Beta/VaR and return/volatility report for configured equities"
)]
struct Args {
    #[clap(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Load configuration
    info!("Loading configuration from {:?}", args.config);
    let config = Config::load(&args.config)?;

    let provider = ChartClient::new(ProviderConfig {
        endpoint: config.provider.endpoint.clone(),
        timeout_sec: config.provider.timeout_sec,
    })?;

    // Beta/VaR per configured symbol, one at a time
    for symbol in &config.beta.symbols {
        run_beta_var(&provider, &config.beta, symbol).await;
    }

    // Return/volatility per configured CSV export
    for file in &config.history.files {
        run_return_profile(file);
    }

    Ok(())
}

/// Fetch, align, and report one symbol; failures stay inside this call
async fn run_beta_var<S: HistorySource>(source: &S, section: &BetaSection, symbol: &str) {
    match beta_var_for_symbol(source, section, symbol).await {
        Ok(report) => {
            info!(
                symbol,
                observations = report.observations,
                "computed beta/VaR"
            );
            report::print_beta_var(symbol, &report);
        }
        Err(e) if e.is_skip() => {
            warn!(symbol, reason = %e, "skipping symbol");
            report::print_beta_var_skip(symbol, &e);
        }
        Err(e) => {
            error!(symbol, error = %e, "failed to process symbol");
            report::print_failure(symbol, &e);
        }
    }
    report::print_separator();
}

async fn beta_var_for_symbol<S: HistorySource>(
    source: &S,
    section: &BetaSection,
    symbol: &str,
) -> FeedResult<BetaVarReport> {
    let stock = source
        .daily_closes(symbol, section.start, section.end)
        .await?;
    let market = source
        .daily_closes(&section.benchmark, section.start, section.end)
        .await?;

    Ok(beta_var_report(&stock, &market)?)
}

/// Load and report one CSV export; failures stay inside this call
fn run_return_profile(file: &Path) {
    let label = report::file_label(file);

    let result = CsvHistory::load(file)
        .and_then(|series| return_profile(&series).map_err(FeedError::from));

    match result {
        Ok(profile) => {
            info!(
                file = %file.display(),
                observations = profile.observations,
                "computed return profile"
            );
            report::print_return_profile(&label, &profile);
        }
        Err(e) if e.is_skip() => {
            warn!(file = %file.display(), reason = %e, "skipping file");
            report::print_history_skip(&label);
        }
        Err(e) => {
            error!(file = %file.display(), error = %e, "failed to process file");
            report::print_failure(&label, &e);
        }
    }
    report::print_separator();
}
