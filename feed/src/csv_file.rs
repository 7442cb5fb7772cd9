//! Local CSV price-history loader
//!
//! Parses broker-style CSV exports with `Date` (DD-Mon-YYYY) and `close`
//! columns. Close values may carry thousands separators ("1,234.50") or be
//! empty; empty cells are treated as gaps and forward-filled.

use crate::error::{FeedError, FeedResult};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use eq_analytics::PriceSeries;
use std::path::Path;
use tracing::debug;

/// Date format used by the exports, e.g. "28-Mar-2024"
const DATE_FORMAT: &str = "%d-%b-%Y";

/// Loader for local close-price exports
pub struct CsvHistory;

impl CsvHistory {
    /// Load a close-price series from a CSV export
    ///
    /// The header match is whitespace-trimmed and case-insensitive. Rows are
    /// sorted by date and gaps in `close` are forward-filled before the
    /// series is built.
    pub fn load<P: AsRef<Path>>(path: P) -> FeedResult<PriceSeries> {
        let path = path.as_ref();
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)?;

        let headers = reader.headers()?.clone();
        let date_idx = Self::column_index(&headers, "Date")?;
        let close_idx = Self::column_index(&headers, "close")?;

        let mut rows = Vec::new();
        for (i, record) in reader.records().enumerate() {
            let record = record?;
            // Header occupies line 1
            let line = i + 2;

            let date_value = record.get(date_idx).unwrap_or("");
            let date = NaiveDate::parse_from_str(date_value, DATE_FORMAT).map_err(|_| {
                FeedError::InvalidDate {
                    line,
                    value: date_value.to_string(),
                }
            })?;

            let close = Self::parse_close(record.get(close_idx).unwrap_or(""), line)?;
            rows.push((date, close));
        }

        if rows.is_empty() {
            return Err(FeedError::NoData(path.display().to_string()));
        }

        debug!(path = %path.display(), rows = rows.len(), "loaded csv history");
        Ok(PriceSeries::forward_filled(rows)?)
    }

    fn column_index(headers: &StringRecord, name: &str) -> FeedResult<usize> {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| FeedError::MissingColumn(name.to_string()))
    }

    /// Coerce a close cell to a number; empty cells are gaps to fill
    fn parse_close(value: &str, line: usize) -> FeedResult<Option<f64>> {
        let cleaned = value.replace(',', "");
        if cleaned.is_empty() || cleaned.eq_ignore_ascii_case("nan") {
            return Ok(None);
        }

        cleaned
            .parse::<f64>()
            .map(Some)
            .map_err(|_| FeedError::InvalidNumber {
                line,
                value: value.to_string(),
            })
    }
}
