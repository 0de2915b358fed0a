//! Backtest report
//!
//! The single output object: performance metrics, the two statistical
//! diagnostics and the full equity curve. `Display` renders the human
//! report; the struct serializes to JSON for machine consumption.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::EquityCurve;
use crate::stats::AdfResult;
use crate::strategy::BacktestParams;

/// Results of one backtest run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestReport {
    /// Parameters the run used
    pub params: BacktestParams,
    /// Final cumulative net PnL ($)
    pub total_return: f64,
    /// Annualized Sharpe ratio of per-period net PnL
    pub sharpe_ratio: f64,
    /// Largest peak-to-trough equity decline, <= 0 ($)
    pub max_drawdown: f64,
    /// Number of position changes
    pub trades: usize,
    /// Stationarity diagnostic (reporting only)
    pub adf: AdfResult,
    /// Mean-reversion strength diagnostic (reporting only)
    pub hurst_exponent: f64,
    /// Cumulative realized PnL per period
    pub equity: EquityCurve,
}

impl fmt::Display for BacktestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- STATISTICAL VALIDATION ---")?;
        writeln!(f, "ADF statistic:     {:.4}", self.adf.statistic)?;
        writeln!(f, "P-value:           {:.6}", self.adf.p_value)?;
        if self.adf.is_stationary() {
            writeln!(f, ">> spread is STATIONARY (suitable for mean reversion)")?;
        } else {
            writeln!(f, ">> spread is NON-STATIONARY (risk of drift)")?;
        }
        writeln!(f, "Hurst exponent:    {:.4}", self.hurst_exponent)?;
        if self.hurst_exponent < 0.5 {
            writeln!(f, ">> series is MEAN REVERTING")?;
        } else {
            writeln!(f, ">> series is trending or a random walk")?;
        }
        writeln!(f)?;
        writeln!(f, "--- PERFORMANCE METRICS ---")?;
        writeln!(f, "Total return ($):  {:.4}", self.total_return)?;
        writeln!(f, "Sharpe ratio:      {:.2}", self.sharpe_ratio)?;
        writeln!(f, "Max drawdown ($):  {:.4}", self.max_drawdown)?;
        write!(f, "Trades:            {}", self.trades)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::domain::Signal;

    fn sample_report() -> BacktestReport {
        let timestamps = vec![Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()];
        let equity = EquityCurve::build(
            &timestamps,
            &[Signal::Flat],
            &[0.0],
            0.02,
        );
        BacktestReport {
            params: BacktestParams::default(),
            total_return: 1.25,
            sharpe_ratio: 0.87,
            max_drawdown: -0.45,
            trades: 14,
            adf: AdfResult {
                statistic: -3.12,
                p_value: 0.0245,
                lags: 5,
                nobs: 300,
                critical_1pct: -3.43,
                critical_5pct: -2.86,
                critical_10pct: -2.57,
            },
            hurst_exponent: 0.43,
            equity,
        }
    }

    #[test]
    fn test_display_sections() {
        let text = sample_report().to_string();
        assert!(text.contains("STATISTICAL VALIDATION"));
        assert!(text.contains("PERFORMANCE METRICS"));
        assert!(text.contains("STATIONARY"));
        assert!(text.contains("MEAN REVERTING"));
        assert!(text.contains("Trades:            14"));
    }

    #[test]
    fn test_json_round_trip() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        let parsed: BacktestReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
