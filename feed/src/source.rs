//! Source trait for daily price history

use crate::error::FeedResult;
use async_trait::async_trait;
use chrono::NaiveDate;
use eq_analytics::PriceSeries;

/// A provider of daily closing-price history
///
/// Implementations fetch the daily closes for one symbol over an inclusive
/// date window and return them as a cleaned [`PriceSeries`]. Rows with
/// missing closes are dropped at this boundary.
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Short source name used in logs
    fn source_name(&self) -> &str;

    /// Fetch daily closes for `symbol` between `start` and `end`
    async fn daily_closes(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FeedResult<PriceSeries>;
}
