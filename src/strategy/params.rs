//! Backtest Parameters
//!
//! Plain numeric knobs for the mean reversion backtest. Defaults match
//! the production strategy: 30-period lookback, +-2.0 entry thresholds,
//! $0.02 flat cost per position change, daily sampling (252 periods/year).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Backtest configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestParams {
    /// Rolling window for mean/std of the spread
    pub lookback: usize,
    /// Upper entry threshold: z-score above this triggers Short
    pub entry_upper: f64,
    /// Lower entry threshold: z-score below this triggers Long
    pub entry_lower: f64,
    /// Flat cost charged once per position change ($ per unit)
    pub cost_per_trade: f64,
    /// Periods per year for Sharpe annualization
    pub periods_per_year: f64,
}

impl Default for BacktestParams {
    fn default() -> Self {
        Self {
            lookback: 30,
            entry_upper: 2.0,
            entry_lower: -2.0,
            cost_per_trade: 0.02,
            periods_per_year: 252.0,
        }
    }
}

impl BacktestParams {
    /// Symmetric entry thresholds at +-z
    pub fn with_entry_z(mut self, z: f64) -> Self {
        self.entry_upper = z;
        self.entry_lower = -z;
        self
    }

    pub fn with_lookback(mut self, lookback: usize) -> Self {
        self.lookback = lookback;
        self
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost_per_trade = cost;
        self
    }

    /// Validate parameter ranges
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.lookback < 2 {
            return Err(ParamsError::InvalidLookback(self.lookback));
        }
        if self.entry_upper <= 0.0 || !self.entry_upper.is_finite() {
            return Err(ParamsError::InvalidUpperEntry(self.entry_upper));
        }
        if self.entry_lower >= 0.0 || !self.entry_lower.is_finite() {
            return Err(ParamsError::InvalidLowerEntry(self.entry_lower));
        }
        if self.cost_per_trade < 0.0 || !self.cost_per_trade.is_finite() {
            return Err(ParamsError::InvalidCost(self.cost_per_trade));
        }
        if self.periods_per_year <= 0.0 || !self.periods_per_year.is_finite() {
            return Err(ParamsError::InvalidPeriodsPerYear(self.periods_per_year));
        }
        Ok(())
    }
}

/// Parameter validation errors
#[derive(Debug, Clone, Error)]
pub enum ParamsError {
    #[error("invalid lookback: {0} (minimum 2)")]
    InvalidLookback(usize),
    #[error("invalid upper entry threshold: {0} (must be finite and > 0)")]
    InvalidUpperEntry(f64),
    #[error("invalid lower entry threshold: {0} (must be finite and < 0)")]
    InvalidLowerEntry(f64),
    #[error("invalid cost per trade: {0} (must be finite and >= 0)")]
    InvalidCost(f64),
    #[error("invalid periods per year: {0} (must be finite and > 0)")]
    InvalidPeriodsPerYear(f64),
}
