//! Error types for the price-history sources

use eq_analytics::AnalyticsError;
use thiserror::Error;

/// Result type for feed operations
pub type FeedResult<T> = Result<T, FeedError>;

/// Feed error types
#[derive(Debug, Error)]
pub enum FeedError {
    /// Provider or file produced no usable rows
    #[error("No data available for {0}")]
    NoData(String),

    /// Provider returned an error payload or a non-success status
    #[error("Provider error for {symbol}: {message}")]
    ProviderError {
        /// Symbol the request was for
        symbol: String,
        /// Error message
        message: String,
        /// Optional provider error code or HTTP status
        code: Option<String>,
    },

    /// Required CSV column is missing from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Unparseable date cell
    #[error("Invalid date '{value}' at line {line}")]
    InvalidDate {
        /// 1-based line number (header is line 1)
        line: usize,
        /// Offending cell contents
        value: String,
    },

    /// Unparseable close cell
    #[error("Invalid close '{value}' at line {line}")]
    InvalidNumber {
        /// 1-based line number (header is line 1)
        line: usize,
        /// Offending cell contents
        value: String,
    },

    /// Client construction or endpoint configuration failed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Series construction or metric computation failed
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// CSV parsing error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FeedError {
    /// Check if the error is a data-insufficiency skip rather than a failure
    ///
    /// Skips are scoped to the current instrument and reported with a named
    /// reason; everything else is reported as an error for that instrument.
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            FeedError::NoData(_)
                | FeedError::Analytics(AnalyticsError::InsufficientData(_))
                | FeedError::Analytics(AnalyticsError::InsufficientReturns { .. })
        )
    }
}
