//! Equity curve construction
//!
//! Turns a dense position sequence and the per-period spread changes into
//! net PnL. Positions are traded at the close, so the PnL of period `t`
//! accrues to the position held at the end of period `t-1`. The flat
//! per-trade cost is charged exactly once per position change, never per
//! period held; a direct Short-to-Long flip is a single change and a
//! single cost.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::signal::Signal;

/// One period of the realized equity curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub timestamp: DateTime<Utc>,
    /// Position held at the end of this period
    pub position: Signal,
    /// Net PnL for this period (gross minus any transaction cost)
    pub net_pnl: f64,
    /// Running sum of net PnL
    pub cumulative: f64,
}

/// Cumulative realized PnL of the simulated single-lot position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityCurve {
    points: Vec<EquityPoint>,
    trades: usize,
}

impl EquityCurve {
    /// Build the curve from aligned positions and period changes.
    ///
    /// The position held before the first period is `Flat`, so a non-flat
    /// position at index 0 already counts as a trade.
    pub fn build(
        timestamps: &[DateTime<Utc>],
        positions: &[Signal],
        period_changes: &[f64],
        cost_per_trade: f64,
    ) -> Self {
        debug_assert_eq!(timestamps.len(), positions.len());
        debug_assert_eq!(timestamps.len(), period_changes.len());

        let mut points = Vec::with_capacity(positions.len());
        let mut cumulative = 0.0;
        let mut trades = 0;
        let mut prior = Signal::Flat;

        for (i, (&position, &change)) in positions.iter().zip(period_changes).enumerate() {
            let gross = prior.as_f64() * change;
            let cost = if position != prior {
                trades += 1;
                cost_per_trade
            } else {
                0.0
            };
            let net_pnl = gross - cost;
            cumulative += net_pnl;
            points.push(EquityPoint {
                timestamp: timestamps[i],
                position,
                net_pnl,
                cumulative,
            });
            prior = position;
        }

        Self { points, trades }
    }

    pub fn points(&self) -> &[EquityPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of position changes over the run
    pub fn trades(&self) -> usize {
        self.trades
    }

    /// Per-period net PnL values
    pub fn period_pnls(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.net_pnl).collect()
    }

    /// Cumulative PnL values
    pub fn cumulative(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.cumulative).collect()
    }

    /// Final cumulative PnL, 0.0 for an empty curve
    pub fn total_return(&self) -> f64 {
        self.points.last().map(|p| p.cumulative).unwrap_or(0.0)
    }
}
