//! Crush Spread Mean Reversion Backtester Library
//!
//! Backtests a z-score mean reversion signal on a commodity crush spread:
//! fixed entry thresholds trigger Long/Short, positions are forward-filled
//! (thresholds never clear a position), a flat cost is charged per
//! position change, and the run is summarized with Sharpe, max drawdown
//! and two statistical diagnostics (ADF, Hurst).
//!
//! # Modules
//!
//! - `domain`: Core types (SpreadSeries, Signal, EquityCurve, errors)
//! - `strategy`: Parameters and the rolling z-score
//! - `stats`: ADF test, Hurst exponent, Sharpe and drawdown metrics
//! - `application`: The Backtester pipeline and its report
//! - `adapters`: CSV load/export, synthetic data, CLI definitions
//! - `config`: TOML configuration loading and validation

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod stats;
pub mod strategy;
