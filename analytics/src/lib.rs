//! # eq-analytics: Risk/Return Statistics for Equity Price Series
//!
//! This library provides the computational core of the equity analytics
//! toolkit: cleaned price series, date alignment, and the elementary
//! risk/return figures derived from daily closes.
//!
//! ## Core Components
//!
//! - **PriceSeries / AlignedPair**: sorted, validated close-price series and
//!   date-intersected pairs for benchmark-relative work
//! - **beta_var_report**: beta (covariance/variance ratio) plus 1% and 5%
//!   historical VaR from the instrument's own return distribution
//! - **return_profile**: expected annual return and annualized volatility
//!   scaled by the 252-trading-day convention
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use eq_analytics::{beta_var_report, PricePoint, PriceSeries};
//!
//! let date = |day: u32| NaiveDate::from_ymd_opt(2024, 4, day).unwrap();
//! let points = |closes: &[f64]| {
//!     closes
//!         .iter()
//!         .enumerate()
//!         .map(|(i, &close)| PricePoint { date: date(1 + i as u32), close })
//!         .collect::<Vec<_>>()
//! };
//!
//! let stock = PriceSeries::new(points(&[100.0, 101.0, 102.0, 100.0])).unwrap();
//! let market = PriceSeries::new(points(&[50.0, 50.5, 51.5, 50.2])).unwrap();
//!
//! let report = beta_var_report(&stock, &market).unwrap();
//! assert!(report.beta > 0.0);
//! assert!(report.var_1pct <= report.var_5pct);
//! ```

mod error;
mod metrics;
mod series;
mod stats;

pub use error::{AnalyticsError, Result};
pub use metrics::{
    beta_var_report, return_profile, BetaVarReport, ReturnProfile, TRADING_DAYS_PER_YEAR,
};
pub use series::{AlignedPair, PricePoint, PriceSeries};
pub use stats::{beta, covariance_matrix, percentile};
