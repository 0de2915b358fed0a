//! Augmented Dickey-Fuller stationarity test
//!
//! Tests for a unit root in the spread series. H0: the series has a unit
//! root (non-stationary); a small p-value means the spread is stationary
//! and therefore a reasonable mean-reversion candidate.
//!
//! The regression includes a constant term:
//!
//!   dy_t = a + b * y_{t-1} + sum_i c_i * dy_{t-i} + e_t
//!
//! The test statistic is the t-statistic of b. The p-value uses the
//! MacKinnon (1994) polynomial approximation of the asymptotic tau
//! distribution for the constant-only case.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use statrs::function::erf::erf;

use crate::domain::errors::BacktestError;

/// Minimum series length for a meaningful regression
const MIN_OBSERVATIONS: usize = 12;

/// Asymptotic critical values for the constant-only case
const CRITICAL_1PCT: f64 = -3.43;
const CRITICAL_5PCT: f64 = -2.86;
const CRITICAL_10PCT: f64 = -2.57;

// MacKinnon (1994) tau approximation, regression with constant, one series.
// Small-p polynomial applies at or below TAU_STAR, large-p above it.
const TAU_MAX: f64 = 2.74;
const TAU_MIN: f64 = -18.83;
const TAU_STAR: f64 = -1.61;
const TAU_SMALL_P: [f64; 3] = [2.1659, 1.4412, 0.038269];
const TAU_LARGE_P: [f64; 4] = [1.7339, 0.93202, -0.12745, -0.010368];

/// Result of the ADF test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdfResult {
    /// t-statistic of the lagged-level coefficient
    pub statistic: f64,
    /// MacKinnon approximate p-value
    pub p_value: f64,
    /// Number of lagged difference terms included
    pub lags: usize,
    /// Observations used in the regression
    pub nobs: usize,
    pub critical_1pct: f64,
    pub critical_5pct: f64,
    pub critical_10pct: f64,
}

impl AdfResult {
    /// Reject the unit-root hypothesis at the 5% level
    pub fn is_stationary(&self) -> bool {
        self.p_value < 0.05
    }
}

/// Run the ADF test on `values` with `lags` lagged difference terms.
///
/// With `lags = None` the Schwert rule `floor(12 * (n/100)^0.25)` picks
/// the lag order, shrunk if the series cannot support it.
pub fn adf_test(values: &[f64], lags: Option<usize>) -> Result<AdfResult, BacktestError> {
    let n = values.len();
    if n < MIN_OBSERVATIONS {
        return Err(BacktestError::InsufficientData {
            required: MIN_OBSERVATIONS,
            actual: n,
        });
    }

    let lag = match lags {
        Some(l) => l,
        None => (12.0 * (n as f64 / 100.0).powf(0.25)).floor() as usize,
    }
    .max(1)
    // The regression needs n - 1 - lag rows for 2 + lag coefficients
    .min((n.saturating_sub(6)) / 2);
    let lag = lag.max(1);

    let diff: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();
    let rows = diff.len() - lag;
    let cols = 2 + lag;
    if rows < cols + 1 {
        return Err(BacktestError::InsufficientData {
            required: cols + 1 + lag + 1,
            actual: n,
        });
    }

    // Regressor row for dy_{t+1}: [1, y_t, dy_t, dy_{t-1}, ..]
    let mut x_data = Vec::with_capacity(rows * cols);
    for t in lag..diff.len() {
        x_data.push(1.0);
        x_data.push(values[t]);
        for i in 1..=lag {
            x_data.push(diff[t - i]);
        }
    }
    let x = DMatrix::from_row_slice(rows, cols, &x_data);
    let y = DVector::from_column_slice(&diff[lag..]);

    // OLS: beta = (X'X)^-1 X'y
    let xtx = x.transpose() * &x;
    let xty = x.transpose() * &y;
    let xtx_inv = xtx
        .try_inverse()
        .ok_or(BacktestError::InsufficientData {
            required: MIN_OBSERVATIONS,
            actual: n,
        })?;
    let beta = &xtx_inv * xty;

    let residuals = &y - &x * &beta;
    let sse: f64 = residuals.iter().map(|r| r * r).sum();
    let mse = sse / (rows - cols) as f64;
    let se = (mse * xtx_inv[(1, 1)]).sqrt();
    if se == 0.0 || !se.is_finite() {
        return Err(BacktestError::InsufficientData {
            required: MIN_OBSERVATIONS,
            actual: n,
        });
    }

    let statistic = beta[1] / se;
    let p_value = mackinnon_p(statistic);

    Ok(AdfResult {
        statistic,
        p_value,
        lags: lag,
        nobs: rows,
        critical_1pct: CRITICAL_1PCT,
        critical_5pct: CRITICAL_5PCT,
        critical_10pct: CRITICAL_10PCT,
    })
}

/// MacKinnon (1994) approximate asymptotic p-value for the tau statistic
fn mackinnon_p(statistic: f64) -> f64 {
    if statistic > TAU_MAX {
        return 1.0;
    }
    if statistic < TAU_MIN {
        return 0.0;
    }
    let z = if statistic <= TAU_STAR {
        polyval(&TAU_SMALL_P, statistic)
    } else {
        polyval(&TAU_LARGE_P, statistic)
    };
    standard_normal_cdf(z)
}

/// Standard normal CDF: phi(z) = 0.5 * (1 + erf(z / sqrt(2)))
fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / f64::sqrt(2.0)))
}

/// Evaluate a polynomial with ascending-order coefficients
fn polyval(coefficients: &[f64], x: f64) -> f64 {
    coefficients
        .iter()
        .rev()
        .fold(0.0, |acc, &c| acc * x + c)
}
