//! Price and return series primitives
//!
//! A [`PriceSeries`] is the cleaned input to every metric routine: sorted by
//! date, free of duplicates, every close positive and finite. Gappy inputs go
//! through [`PriceSeries::forward_filled`], which carries the last observed
//! close across missing rows. [`AlignedPair`] joins two series on their common
//! dates for benchmark-relative calculations.

use crate::error::{AnalyticsError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A single daily observation: trading date and closing price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Date-ordered closing prices for one instrument
///
/// Invariant: dates are strictly increasing and every close is a positive,
/// finite number.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from raw observations
    ///
    /// Points are sorted by date. Duplicate dates and non-positive or
    /// non-finite closes are rejected.
    pub fn new(mut points: Vec<PricePoint>) -> Result<Self> {
        points.sort_by_key(|p| p.date);

        for pair in points.windows(2) {
            if pair[0].date == pair[1].date {
                return Err(AnalyticsError::DuplicateDate(pair[0].date));
            }
        }

        for point in &points {
            if !point.close.is_finite() || point.close <= 0.0 {
                return Err(AnalyticsError::InvalidPrice {
                    date: point.date,
                    close: point.close,
                });
            }
        }

        Ok(Self { points })
    }

    /// Build a series from rows that may be missing a close
    ///
    /// Rows are sorted by date; leading gaps are dropped and interior or
    /// trailing gaps carry the last observed close forward.
    pub fn forward_filled(mut rows: Vec<(NaiveDate, Option<f64>)>) -> Result<Self> {
        rows.sort_by_key(|(date, _)| *date);

        let mut points = Vec::with_capacity(rows.len());
        let mut last_close: Option<f64> = None;

        for (date, close) in rows {
            match close.or(last_close) {
                Some(value) => {
                    last_close = Some(value);
                    points.push(PricePoint { date, close: value });
                }
                // No close observed yet; nothing to carry forward
                None => continue,
            }
        }

        Self::new(points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Simple daily returns, one element shorter than the series
    ///
    /// The undefined first-period return is never materialized.
    pub fn daily_returns(&self) -> Vec<f64> {
        self.points
            .windows(2)
            .map(|w| (w[1].close - w[0].close) / w[0].close)
            .collect()
    }
}

/// Two price series joined on their common dates
///
/// Invariant: equal length, index-aligned, no missing value on either side.
#[derive(Debug, Clone)]
pub struct AlignedPair {
    dates: Vec<NaiveDate>,
    stock: Vec<f64>,
    market: Vec<f64>,
}

impl AlignedPair {
    /// Intersect two series by date, dropping rows present on only one side
    pub fn align(stock: &PriceSeries, market: &PriceSeries) -> Self {
        let s = stock.points();
        let m = market.points();

        let mut dates = Vec::new();
        let mut stock_closes = Vec::new();
        let mut market_closes = Vec::new();

        let (mut i, mut j) = (0, 0);
        while i < s.len() && j < m.len() {
            match s[i].date.cmp(&m[j].date) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    dates.push(s[i].date);
                    stock_closes.push(s[i].close);
                    market_closes.push(m[j].close);
                    i += 1;
                    j += 1;
                }
            }
        }

        Self {
            dates,
            stock: stock_closes,
            market: market_closes,
        }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Daily returns of both legs over the aligned dates
    pub fn returns(&self) -> (Vec<f64>, Vec<f64>) {
        let pct = |closes: &[f64]| -> Vec<f64> {
            closes.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect()
        };
        (pct(&self.stock), pct(&self.market))
    }
}
