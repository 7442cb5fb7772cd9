//! Sample statistics over return series
//!
//! Moment calculations use the sample (n-1) convention throughout:
//! - Covariance matrix: entry (0,1) is Cov(x, y), entry (1,1) is Var(y)
//! - Beta: `β = Cov(stock, market) / Var(market)`
//! - Percentile: empirical, linearly interpolated between order statistics

use crate::error::{AnalyticsError, Result};
use nalgebra::Matrix2;
use statrs::statistics::Statistics;

/// Sample covariance matrix of two equally-long return series
pub fn covariance_matrix(xs: &[f64], ys: &[f64]) -> Result<Matrix2<f64>> {
    if xs.len() != ys.len() {
        return Err(AnalyticsError::LengthMismatch {
            left: xs.len(),
            right: ys.len(),
        });
    }
    if xs.len() < 2 {
        return Err(AnalyticsError::InsufficientData(format!(
            "need at least 2 paired observations, got {}",
            xs.len()
        )));
    }

    let cov = xs.covariance(ys);
    Ok(Matrix2::new(xs.variance(), cov, cov, ys.variance()))
}

/// Beta of `stock` relative to `market`
pub fn beta(stock: &[f64], market: &[f64]) -> Result<f64> {
    let cov = covariance_matrix(stock, market)?;

    let market_variance = cov[(1, 1)];
    if market_variance == 0.0 {
        return Err(AnalyticsError::ZeroVariance(
            "market returns have zero variance".to_string(),
        ));
    }

    Ok(cov[(0, 1)] / market_variance)
}

/// Empirical percentile of `values`
///
/// `pct` is on the 0-100 scale; pct = 5.0 is the lower 5% tail. The result is
/// linearly interpolated between the two nearest order statistics.
pub fn percentile(values: &[f64], pct: f64) -> Result<f64> {
    if !(0.0..=100.0).contains(&pct) {
        return Err(AnalyticsError::InvalidPercentile(pct));
    }
    if values.is_empty() {
        return Err(AnalyticsError::InsufficientData(
            "no observations for percentile".to_string(),
        ));
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = pct / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return Ok(sorted[lo]);
    }

    let weight = rank - lo as f64;
    Ok(sorted[lo] * (1.0 - weight) + sorted[hi] * weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_covariance_matrix_is_symmetric() {
        let xs = [0.01, 0.02, -0.01, 0.015];
        let ys = [0.008, 0.015, -0.012, 0.01];

        let cov = covariance_matrix(&xs, &ys).unwrap();

        assert_eq!(cov[(0, 1)], cov[(1, 0)]);
        assert!(cov[(0, 0)] > 0.0);
        assert!(cov[(1, 1)] > 0.0);
    }

    #[test]
    fn test_beta_of_series_against_itself_is_one() {
        let returns = [0.01, -0.02, 0.015, 0.005, -0.01];

        let beta = beta(&returns, &returns).unwrap();
        assert_relative_eq!(beta, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_beta_scales_with_amplified_market() {
        let market = [0.01, -0.02, 0.015, 0.005, -0.01];
        let stock: Vec<f64> = market.iter().map(|r| r * 2.0).collect();

        let beta = beta(&stock, &market).unwrap();
        assert_relative_eq!(beta, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_beta_rejects_zero_market_variance() {
        let stock = [0.01, 0.02, 0.03];
        let market = [0.01, 0.01, 0.01];

        let result = beta(&stock, &market);
        assert!(matches!(result, Err(AnalyticsError::ZeroVariance(_))));
    }

    #[test]
    fn test_beta_rejects_mismatched_lengths() {
        let result = beta(&[0.01, 0.02], &[0.01]);
        assert!(matches!(
            result,
            Err(AnalyticsError::LengthMismatch { left: 2, right: 1 })
        ));
    }

    #[test]
    fn test_percentile_interpolates() {
        let values = [1.0, 2.0, 3.0, 4.0];

        // rank = 0.5 * 3 = 1.5, halfway between 2.0 and 3.0
        let median = percentile(&values, 50.0).unwrap();
        assert_relative_eq!(median, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_percentile_endpoints() {
        let values = [3.0, 1.0, 2.0];

        assert_eq!(percentile(&values, 0.0).unwrap(), 1.0);
        assert_eq!(percentile(&values, 100.0).unwrap(), 3.0);
    }

    #[test]
    fn test_percentile_rejects_out_of_range() {
        let values = [1.0, 2.0];
        assert!(matches!(
            percentile(&values, 101.0),
            Err(AnalyticsError::InvalidPercentile(_))
        ));
        assert!(matches!(
            percentile(&values, -1.0),
            Err(AnalyticsError::InvalidPercentile(_))
        ));
    }

    #[test]
    fn test_percentile_rejects_empty() {
        assert!(matches!(
            percentile(&[], 5.0),
            Err(AnalyticsError::InsufficientData(_))
        ));
    }
}
