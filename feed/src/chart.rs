//! Chart-endpoint HTTP client
//!
//! Fetches daily closing prices from a v8 chart endpoint
//! (`GET {endpoint}/v8/finance/chart/{symbol}?interval=1d&period1=..&period2=..`)
//! and maps the JSON envelope into a [`PriceSeries`].

use crate::error::{FeedError, FeedResult};
use crate::source::HistorySource;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime};
use eq_analytics::{PricePoint, PriceSeries};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Provider connection settings
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base endpoint, e.g. "https://query1.finance.yahoo.com"
    pub endpoint: String,

    /// Request timeout in seconds
    pub timeout_sec: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://query1.finance.yahoo.com".to_string(),
            timeout_sec: 30,
        }
    }
}

/// HTTP client for the chart endpoint
pub struct ChartClient {
    config: ProviderConfig,
    client: Client,
}

impl ChartClient {
    /// Create a new chart client
    pub fn new(config: ProviderConfig) -> FeedResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_sec))
            .user_agent("Mozilla/5.0")
            .build()
            .map_err(|e| FeedError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn chart_url(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> FeedResult<Url> {
        let mut url = Url::parse(&self.config.endpoint)
            .map_err(|e| FeedError::ConfigError(format!("Invalid endpoint: {}", e)))?;

        url.set_path(&format!("/v8/finance/chart/{}", symbol));
        url.query_pairs_mut()
            .append_pair("interval", "1d")
            .append_pair("period1", &unix_midnight(start).to_string())
            .append_pair("period2", &unix_midnight(end).to_string());

        Ok(url)
    }
}

fn unix_midnight(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

#[async_trait]
impl HistorySource for ChartClient {
    fn source_name(&self) -> &str {
        "chart"
    }

    async fn daily_closes(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FeedResult<PriceSeries> {
        let url = self.chart_url(symbol, start, end)?;
        debug!(symbol, %url, "requesting daily close history");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unreadable response body".to_string());
            return Err(FeedError::ProviderError {
                symbol: symbol.to_string(),
                message,
                code: Some(status.as_str().to_string()),
            });
        }

        let body = response.text().await?;
        let payload: ChartResponse = serde_json::from_str(&body)?;

        if let Some(error) = payload.chart.error {
            return Err(FeedError::ProviderError {
                symbol: symbol.to_string(),
                message: format!("{}: {}", error.code, error.description),
                code: Some(error.code),
            });
        }

        let result = payload
            .chart
            .result
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.remove(0))
                }
            })
            .ok_or_else(|| FeedError::NoData(symbol.to_string()))?;

        let quote = result
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| FeedError::NoData(symbol.to_string()))?;

        let timestamps = result.timestamp.unwrap_or_default();
        let mut points = Vec::with_capacity(timestamps.len());
        for (i, &ts) in timestamps.iter().enumerate() {
            let close = match quote.close.get(i).copied().flatten() {
                Some(close) if close.is_finite() && close > 0.0 => close,
                // Incomplete row; dropped before alignment
                _ => continue,
            };
            match DateTime::from_timestamp(ts, 0) {
                Some(dt) => points.push(PricePoint {
                    date: dt.date_naive(),
                    close,
                }),
                None => warn!(symbol, ts, "skipping out-of-range timestamp"),
            }
        }

        if points.is_empty() {
            return Err(FeedError::NoData(symbol.to_string()));
        }

        let series = PriceSeries::new(points)?;
        info!(symbol, rows = series.len(), "fetched daily close history");
        Ok(series)
    }
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    close: Vec<Option<f64>>,
}
