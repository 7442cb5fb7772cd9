//! # eq-feed: Daily Price-History Sources
//!
//! This library is the data boundary of the equity analytics toolkit. It
//! turns remote chart payloads and local CSV exports into the cleaned
//! [`PriceSeries`](eq_analytics::PriceSeries) the analytics crate consumes.
//!
//! ## Core Components
//!
//! - **HistorySource**: trait seam for daily-close providers
//! - **ChartClient**: HTTP client for a v8 chart endpoint
//! - **CsvHistory**: loader for local CSV exports with forward-filled gaps
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use eq_feed::{ChartClient, HistorySource, ProviderConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = ChartClient::new(ProviderConfig::default()).unwrap();
//!
//!     let start = NaiveDate::from_ymd_opt(2024, 3, 28).unwrap();
//!     let end = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
//!
//!     match client.daily_closes("NTPC.NS", start, end).await {
//!         Ok(series) => println!("{} rows", series.len()),
//!         Err(e) => eprintln!("fetch failed: {}", e),
//!     }
//! }
//! ```

pub mod chart;
pub mod csv_file;
pub mod error;
pub mod source;

pub use chart::{ChartClient, ProviderConfig};
pub use csv_file::CsvHistory;
pub use error::{FeedError, FeedResult};
pub use source::HistorySource;
