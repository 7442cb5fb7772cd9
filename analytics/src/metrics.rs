//! Instrument-level metric routines
//!
//! Implements the two terminal reports:
//! - [`beta_var_report`]: beta against a benchmark plus 1% and 5% historical
//!   VaR from the instrument's own return distribution
//! - [`return_profile`]: expected annual return (mean × 252) and annualized
//!   volatility (stdev × √252) from a single price history

use crate::error::{AnalyticsError, Result};
use crate::series::{AlignedPair, PriceSeries};
use crate::stats;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Trading days per year used to scale daily statistics
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Beta and lower-tail risk of one instrument against a benchmark
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetaVarReport {
    /// Sensitivity to benchmark returns (unitless)
    pub beta: f64,

    /// 1% lower-tail daily return percentile (fractional)
    pub var_1pct: f64,

    /// 5% lower-tail daily return percentile (fractional)
    pub var_5pct: f64,

    /// Number of aligned return observations used
    pub observations: usize,
}

/// Annualized return and volatility of one price history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnProfile {
    /// Mean daily return scaled to a trading year (fractional)
    pub expected_annual_return: f64,

    /// Sample stdev of daily returns scaled to a trading year (fractional)
    pub annualized_std_dev: f64,

    /// Number of daily return observations used
    pub observations: usize,
}

/// Compute beta and historical VaR for one instrument against a benchmark
///
/// The two series are intersected by date before differencing, so rows
/// missing on either side never contribute. Insufficiency at any stage
/// (empty input, fewer than 2 aligned rows, fewer than 2 returns) is a
/// distinct, skippable error rather than a panic or a NaN.
pub fn beta_var_report(stock: &PriceSeries, market: &PriceSeries) -> Result<BetaVarReport> {
    if stock.is_empty() || market.is_empty() {
        return Err(AnalyticsError::InsufficientData(
            "empty price series".to_string(),
        ));
    }

    let aligned = AlignedPair::align(stock, market);
    if aligned.len() < 2 {
        return Err(AnalyticsError::InsufficientData(format!(
            "only {} aligned rows after cleaning",
            aligned.len()
        )));
    }

    let (stock_returns, market_returns) = aligned.returns();
    if stock_returns.len() < 2 {
        return Err(AnalyticsError::InsufficientReturns {
            observed: stock_returns.len(),
            required: 2,
        });
    }

    let beta = stats::beta(&stock_returns, &market_returns)?;
    // VaR is taken from the stock's own distribution, not benchmark-relative
    let var_1pct = stats::percentile(&stock_returns, 1.0)?;
    let var_5pct = stats::percentile(&stock_returns, 5.0)?;

    Ok(BetaVarReport {
        beta,
        var_1pct,
        var_5pct,
        observations: stock_returns.len(),
    })
}

/// Compute annualized expected return and volatility for one price history
pub fn return_profile(prices: &PriceSeries) -> Result<ReturnProfile> {
    let returns = prices.daily_returns();
    if returns.len() < 2 {
        return Err(AnalyticsError::InsufficientReturns {
            observed: returns.len(),
            required: 2,
        });
    }

    let expected_annual_return = returns.as_slice().mean() * TRADING_DAYS_PER_YEAR;
    let annualized_std_dev = returns.as_slice().std_dev() * TRADING_DAYS_PER_YEAR.sqrt();

    Ok(ReturnProfile {
        expected_annual_return,
        annualized_std_dev,
        observations: returns.len(),
    })
}
