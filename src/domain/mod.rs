//! Domain Layer - Core backtest types and logic
//!
//! Pure domain types with no I/O: the spread series, threshold signals,
//! forward-filled positions and the equity curve. Everything here is a
//! deterministic function of its inputs.

pub mod equity;
pub mod errors;
pub mod observation;
pub mod signal;

pub use equity::{EquityCurve, EquityPoint};
pub use errors::BacktestError;
pub use observation::{Observation, SpreadPoint, SpreadSeries};
pub use signal::{forward_fill, Signal};
