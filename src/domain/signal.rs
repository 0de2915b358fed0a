//! Threshold signals and position forward-fill
//!
//! Entry thresholds only *trigger* signals, they never clear them: once a
//! Long or Short is triggered the position is held until the opposite
//! threshold fires. There is no exit-to-flat rule. That mirrors the
//! strategy as designed; whether an exit threshold should exist is an open
//! strategy question, not something the backtester invents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-valued position signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    /// Spread below the lower threshold: buy the spread
    Long,
    /// Spread above the upper threshold: sell the spread
    Short,
    /// No position
    Flat,
}

impl Signal {
    /// Signed position weight used in PnL arithmetic
    pub fn as_f64(self) -> f64 {
        match self {
            Signal::Long => 1.0,
            Signal::Short => -1.0,
            Signal::Flat => 0.0,
        }
    }

    /// Threshold trigger rule.
    ///
    /// Returns `Some(Short)` above the upper threshold, `Some(Long)` below
    /// the lower threshold, and `None` in between. `None` means "no new
    /// signal", which forward-fill resolves to the prior position.
    pub fn from_z_score(z_score: f64, upper: f64, lower: f64) -> Option<Signal> {
        if z_score > upper {
            Some(Signal::Short)
        } else if z_score < lower {
            Some(Signal::Long)
        } else {
            None
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Long => write!(f, "Long"),
            Signal::Short => write!(f, "Short"),
            Signal::Flat => write!(f, "Flat"),
        }
    }
}

/// Forward-fill a sparse signal sequence into a dense position sequence.
///
/// Positions before the first triggered signal are `Flat`. The position at
/// index `t` depends only on signals at indices `<= t`.
pub fn forward_fill(signals: &[Option<Signal>]) -> Vec<Signal> {
    let mut last = Signal::Flat;
    signals
        .iter()
        .map(|signal| {
            if let Some(s) = signal {
                last = *s;
            }
            last
        })
        .collect()
}
