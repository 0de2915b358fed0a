//! Statistics Layer - diagnostics and performance metrics
//!
//! - `adf`: Augmented Dickey-Fuller unit-root test (stationarity check)
//! - `hurst`: Hurst exponent estimate (mean-reversion strength)
//! - `metrics`: Sharpe ratio and max drawdown over the equity curve
//!
//! The diagnostics are reporting-only: nothing here feeds back into the
//! signal rule.

pub mod adf;
pub mod hurst;
pub mod metrics;

pub use adf::{adf_test, AdfResult};
pub use hurst::hurst_exponent;
pub use metrics::{max_drawdown, sharpe_ratio};

/// Arithmetic mean, 0.0 for an empty slice
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (n denominator)
pub(crate) fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Sample standard deviation (n - 1 denominator), 0.0 when n < 2
pub(crate) fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance =
        values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}
