//! Application Layer - backtest orchestration
//!
//! Wires the strategy, domain and stats layers into the full pipeline:
//! validate input, derive z-scores, trigger signals, forward-fill
//! positions, accrue PnL and costs, then attach metrics and diagnostics.

pub mod backtester;
pub mod report;

pub use backtester::{Backtester, Simulation};
pub use report::BacktestReport;
