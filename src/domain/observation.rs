//! Spread series and observation types
//!
//! `SpreadSeries` is the raw input: chronological (timestamp, spread)
//! points. `Observation` is the derived per-period record the backtest
//! consumes once the rolling z-score is known.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::BacktestError;

/// A single (timestamp, spread) point of the raw series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpreadPoint {
    pub timestamp: DateTime<Utc>,
    pub spread: f64,
}

/// Time-ordered spread series, assumed chronological with no gaps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadSeries {
    points: Vec<SpreadPoint>,
}

impl SpreadSeries {
    /// Build a series, rejecting non-finite spread values
    pub fn new(points: Vec<SpreadPoint>) -> Result<Self, BacktestError> {
        for (index, point) in points.iter().enumerate() {
            if !point.spread.is_finite() {
                return Err(BacktestError::InvalidInput {
                    index,
                    value: point.spread,
                });
            }
        }
        Ok(Self { points })
    }

    /// Build from parallel timestamp and value slices (convenience for tests)
    pub fn from_values(
        timestamps: Vec<DateTime<Utc>>,
        values: Vec<f64>,
    ) -> Result<Self, BacktestError> {
        let points = timestamps
            .into_iter()
            .zip(values)
            .map(|(timestamp, spread)| SpreadPoint { timestamp, spread })
            .collect();
        Self::new(points)
    }

    pub fn points(&self) -> &[SpreadPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Spread values in order
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.spread).collect()
    }

    /// Timestamps in order
    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.points.iter().map(|p| p.timestamp).collect()
    }

    /// Period-over-period spread changes, with 0.0 for the first period
    /// (there is no prior close to difference against)
    pub fn period_changes(&self) -> Vec<f64> {
        let mut changes = Vec::with_capacity(self.points.len());
        for (i, point) in self.points.iter().enumerate() {
            if i == 0 {
                changes.push(0.0);
            } else {
                changes.push(point.spread - self.points[i - 1].spread);
            }
        }
        changes
    }
}

/// One fully-derived backtest input row: period return plus the rolling
/// z-score of the spread at that timestamp
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub timestamp: DateTime<Utc>,
    /// Spread change over the period ending at `timestamp`
    pub period_return: f64,
    /// Rolling z-score of the spread at `timestamp`
    pub z_score: f64,
}

impl Observation {
    /// Reject non-finite return or z-score values
    pub fn validate(observations: &[Observation]) -> Result<(), BacktestError> {
        for (index, obs) in observations.iter().enumerate() {
            if !obs.period_return.is_finite() {
                return Err(BacktestError::InvalidInput {
                    index,
                    value: obs.period_return,
                });
            }
            if !obs.z_score.is_finite() {
                return Err(BacktestError::InvalidInput {
                    index,
                    value: obs.z_score,
                });
            }
        }
        Ok(())
    }
}
