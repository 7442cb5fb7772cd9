//! Console reporting for per-instrument results
//!
//! Output mirrors the batch-report conventions: a status glyph, the figures
//! as percentages where applicable, and a 50-dash separator per instrument.

use eq_analytics::{AnalyticsError, BetaVarReport, ReturnProfile};
use eq_feed::FeedError;
use std::path::Path;

/// Display name for a ticker: the portion before the exchange suffix
pub fn display_name(symbol: &str) -> &str {
    symbol.split('.').next().unwrap_or(symbol)
}

/// Label for a CSV export: base name without path or extension
pub fn file_label(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn print_beta_var(symbol: &str, report: &BetaVarReport) {
    println!("✅ Results for {}:", display_name(symbol));
    println!("Beta: {:.4}", report.beta);
    println!("1% VaR: {:.2}%", report.var_1pct * 100.0);
    println!("5% VaR: {:.2}%", report.var_5pct * 100.0);
}

pub fn print_return_profile(label: &str, profile: &ReturnProfile) {
    println!("✅ Results for {}:", label);
    println!(
        "Expected Annual Return: {:.2}%",
        profile.expected_annual_return * 100.0
    );
    println!(
        "Annualized Standard Deviation: {:.2}%",
        profile.annualized_std_dev * 100.0
    );
}

/// Named skip message for the beta/VaR routine
pub fn print_beta_var_skip(symbol: &str, err: &FeedError) {
    match err {
        FeedError::NoData(_) => {
            println!("❗ No data available for {} or market. Skipping...", symbol)
        }
        FeedError::Analytics(AnalyticsError::InsufficientReturns { .. }) => println!(
            "❗ Not enough return data to calculate Beta and VaR for {}. Skipping...",
            symbol
        ),
        _ => println!("❗ Insufficient data for {}. Skipping...", symbol),
    }
}

pub fn print_history_skip(label: &str) {
    println!("❗ Insufficient data for {}. Skipping...", label);
}

pub fn print_failure(label: &str, err: &FeedError) {
    println!("❗ Error processing {}: {}", label, err);
}

pub fn print_separator() {
    println!("{}", "-".repeat(50));
}
