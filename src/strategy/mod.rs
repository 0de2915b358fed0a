//! Strategy Layer - Mean reversion with z-score threshold entries
//!
//! - Rolling z-score of the spread over a configurable lookback window
//! - Fixed entry thresholds that trigger Short above and Long below
//! - Parameter validation with typed errors

pub mod params;
pub mod zscore;

pub use params::{BacktestParams, ParamsError};
pub use zscore::rolling_z_scores;
