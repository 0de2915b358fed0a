//! Backtest error types
//!
//! Only two error kinds exist on the computation path. Both are terminal:
//! the backtest is a one-shot batch transformation with nothing to retry.

use thiserror::Error;

/// Errors surfaced by the backtest computation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BacktestError {
    /// Series too short for the rolling window or a diagnostic
    #[error("insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Non-finite value in the input series
    #[error("invalid input at index {index}: value {value} is not finite")]
    InvalidInput { index: usize, value: f64 },
}
