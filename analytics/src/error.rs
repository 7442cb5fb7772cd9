//! Error types for series construction and metric computation

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while building series or computing metrics
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Not enough return observations: {observed} (need at least {required})")]
    InsufficientReturns { observed: usize, required: usize },

    #[error("Series length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Zero variance: {0}")]
    ZeroVariance(String),

    #[error("Invalid percentile: {0} (must be between 0 and 100)")]
    InvalidPercentile(f64),

    #[error("Invalid close {close} on {date} (must be positive and finite)")]
    InvalidPrice { date: NaiveDate, close: f64 },

    #[error("Duplicate date in series: {0}")]
    DuplicateDate(NaiveDate),
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
