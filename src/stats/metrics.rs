//! Performance metrics
//!
//! Annualized Sharpe ratio over per-period net PnL and maximum drawdown
//! over the cumulative equity curve. Since PnL is in dollars rather than
//! percentage returns the Sharpe here is strictly an information ratio,
//! but it is computed and reported the conventional way.

use crate::stats::{mean, sample_std};

/// Annualized Sharpe ratio of per-period PnL.
///
/// Returns 0.0 when the PnL standard deviation is zero (e.g. an all-flat
/// run) instead of propagating a division by zero.
pub fn sharpe_ratio(period_pnls: &[f64], periods_per_year: f64) -> f64 {
    let std_dev = sample_std(period_pnls);
    if std_dev == 0.0 {
        return 0.0;
    }
    mean(period_pnls) / std_dev * periods_per_year.sqrt()
}

/// Maximum drawdown of a cumulative equity curve.
///
/// The largest decline from a running peak, expressed as a value <= 0.
/// A monotonically non-decreasing curve has a drawdown of exactly 0.
pub fn max_drawdown(cumulative: &[f64]) -> f64 {
    let mut peak = f64::NEG_INFINITY;
    let mut worst = 0.0_f64;
    for &value in cumulative {
        peak = peak.max(value);
        worst = worst.min(value - peak);
    }
    worst
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sharpe_zero_std_is_zero() {
        assert_eq!(sharpe_ratio(&[0.0, 0.0, 0.0], 252.0), 0.0);
        assert_eq!(sharpe_ratio(&[], 252.0), 0.0);
    }

    #[test]
    fn test_sharpe_positive_pnl() {
        let pnls = [0.01, 0.02, 0.015, 0.005, 0.02];
        let sharpe = sharpe_ratio(&pnls, 252.0);
        assert!(sharpe > 0.0);
        assert!(sharpe.is_finite());
    }

    #[test]
    fn test_sharpe_annualization() {
        let pnls = [0.01, -0.02, 0.03, 0.01, -0.01, 0.02];
        let daily = sharpe_ratio(&pnls, 1.0);
        let annual = sharpe_ratio(&pnls, 252.0);
        assert_relative_eq!(annual, daily * 252.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_drawdown_monotonic_is_zero() {
        assert_eq!(max_drawdown(&[0.0, 0.1, 0.2, 0.3, 0.5]), 0.0);
    }

    #[test]
    fn test_drawdown_peak_to_trough() {
        // Peak 0.5, trough -0.1 after the peak
        let curve = [0.0, 0.5, 0.2, -0.1, 0.3];
        assert_relative_eq!(max_drawdown(&curve), -0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_drawdown_initial_decline() {
        // First value is the peak
        let curve = [0.0, -0.2, -0.1];
        assert_relative_eq!(max_drawdown(&curve), -0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_drawdown_empty() {
        assert_eq!(max_drawdown(&[]), 0.0);
    }
}
