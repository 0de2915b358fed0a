//! Hurst exponent estimation
//!
//! Estimates long-memory behavior from the scaling of lagged differences:
//! for each lag, tau(lag) = sqrt(std(x[lag..] - x[..n-lag])), then H is
//! twice the slope of log(tau) against log(lag).
//!
//! Interpretation:
//! - H < 0.5: mean reverting
//! - H = 0.5: random walk
//! - H > 0.5: trending

use crate::domain::errors::BacktestError;
use crate::stats::population_std;

/// Largest lag considered (exclusive), matching the calibration window
const MAX_LAG: usize = 100;
/// Minimum number of usable lag points for the log-log fit
const MIN_LAG_POINTS: usize = 8;

/// Estimate the Hurst exponent of `values`.
///
/// Lags run from 2 up to `min(100, n / 2)`. Fails when the series is too
/// short (or too degenerate) to yield enough lag points for the fit.
pub fn hurst_exponent(values: &[f64]) -> Result<f64, BacktestError> {
    let n = values.len();
    let max_lag = MAX_LAG.min(n / 2);
    let required = 2 * (MIN_LAG_POINTS + 2);
    if max_lag < MIN_LAG_POINTS + 2 {
        return Err(BacktestError::InsufficientData {
            required,
            actual: n,
        });
    }

    let mut log_lags = Vec::with_capacity(max_lag - 2);
    let mut log_taus = Vec::with_capacity(max_lag - 2);
    for lag in 2..max_lag {
        let diffs: Vec<f64> = values[lag..]
            .iter()
            .zip(&values[..n - lag])
            .map(|(a, b)| a - b)
            .collect();
        let tau = population_std(&diffs).sqrt();
        // Constant stretches give tau = 0, which has no log
        if tau > 1e-12 {
            log_lags.push((lag as f64).ln());
            log_taus.push(tau.ln());
        }
    }

    if log_lags.len() < MIN_LAG_POINTS {
        return Err(BacktestError::InsufficientData {
            required,
            actual: n,
        });
    }

    Ok(2.0 * slope(&log_lags, &log_taus))
}

/// Least-squares slope of y against x
fn slope(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;
    let numerator: f64 = x
        .iter()
        .zip(y)
        .map(|(xi, yi)| (xi - mean_x) * (yi - mean_y))
        .sum();
    let denominator: f64 = x.iter().map(|xi| (xi - mean_x).powi(2)).sum();
    numerator / denominator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_series_fails() {
        let values = vec![1.0; 10];
        assert!(matches!(
            hurst_exponent(&values),
            Err(BacktestError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_constant_series_fails() {
        // All lagged differences are zero, no usable lag points
        let values = vec![1.5; 300];
        assert!(matches!(
            hurst_exponent(&values),
            Err(BacktestError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_trending_series_has_high_h() {
        // An accelerating trend is maximally persistent (a straight line
        // has zero-variance lagged differences, which the fit skips)
        let values: Vec<f64> = (0..400).map(|i| (i as f64).powi(2) * 1e-4).collect();
        let h = hurst_exponent(&values).unwrap();
        assert!(h > 0.8, "trend should score H near 1, got {h}");
    }

    #[test]
    fn test_oscillating_series_has_low_h() {
        // Rapid oscillation around a level is strongly anti-persistent
        let values: Vec<f64> = (0..400)
            .map(|i| if i % 2 == 0 { 1.0 } else { -1.0 })
            .collect();
        let h = hurst_exponent(&values).unwrap();
        assert!(h < 0.3, "oscillation should score H near 0, got {h}");
    }

    #[test]
    fn test_random_walk_near_half() {
        // Deterministic xorshift increments approximate a random walk
        let mut state = 0x9E3779B97F4A7C15_u64;
        let mut values = vec![0.0];
        for _ in 1..2000 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let step = (state as f64 / u64::MAX as f64) - 0.5;
            values.push(values.last().unwrap() + step);
        }
        let h = hurst_exponent(&values).unwrap();
        assert!((0.3..0.7).contains(&h), "random walk H should be near 0.5, got {h}");
    }
}
