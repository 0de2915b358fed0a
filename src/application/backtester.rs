//! Backtest engine
//!
//! The computation is a pure function of its inputs: no I/O, no shared
//! state, single pass. Running it twice on the same input produces the
//! same report.

use tracing::debug;

use crate::domain::{
    forward_fill, BacktestError, EquityCurve, Observation, Signal, SpreadSeries,
};
use crate::stats::{adf_test, hurst_exponent, max_drawdown, sharpe_ratio, AdfResult};
use crate::strategy::params::ParamsError;
use crate::strategy::{rolling_z_scores, BacktestParams};

use super::report::BacktestReport;

/// Positions and equity without metrics or diagnostics.
///
/// This is the simulation kernel on its own; `Backtester::run` wraps it
/// with the reporting layer, which needs longer series for the
/// diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    pub positions: Vec<Signal>,
    pub equity: EquityCurve,
}

/// Mean reversion signal backtester
#[derive(Debug, Clone)]
pub struct Backtester {
    params: BacktestParams,
}

impl Backtester {
    /// Create a backtester with validated parameters
    pub fn new(params: BacktestParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &BacktestParams {
        &self.params
    }

    /// Full backtest over a raw spread series.
    ///
    /// Derives the rolling z-score internally; the stationarity and
    /// mean-reversion diagnostics run on the spread itself.
    pub fn run(&self, series: &SpreadSeries) -> Result<BacktestReport, BacktestError> {
        let values = series.values();
        let z_scores = rolling_z_scores(&values, self.params.lookback)?;
        let returns = series.period_changes();

        let observations: Vec<Observation> = series
            .points()
            .iter()
            .zip(returns)
            .zip(&z_scores)
            .map(|((point, period_return), z)| Observation {
                timestamp: point.timestamp,
                period_return,
                // Warmup periods carry a neutral z-score; the trigger rule
                // cannot fire inside (entry_lower, entry_upper) anyway
                z_score: z.unwrap_or(0.0),
            })
            .collect();

        let simulation = self.simulate(&observations)?;
        let adf = adf_test(&values, None)?;
        let hurst = hurst_exponent(&values)?;
        Ok(self.report(simulation, adf, hurst))
    }

    /// Full backtest over pre-computed (timestamp, return, z-score) rows.
    ///
    /// The diagnostics run on the z-score series, the only spread-derived
    /// statistic available in this form.
    pub fn run_observations(
        &self,
        observations: &[Observation],
    ) -> Result<BacktestReport, BacktestError> {
        let simulation = self.simulate(observations)?;
        let z_values: Vec<f64> = observations.iter().map(|o| o.z_score).collect();
        let adf = adf_test(&z_values, None)?;
        let hurst = hurst_exponent(&z_values)?;
        Ok(self.report(simulation, adf, hurst))
    }

    /// Signal-to-equity kernel: threshold triggers, forward-fill, PnL and
    /// per-change costs. Validates finiteness but imposes no minimum
    /// length.
    pub fn simulate(&self, observations: &[Observation]) -> Result<Simulation, BacktestError> {
        Observation::validate(observations)?;

        let signals: Vec<Option<Signal>> = observations
            .iter()
            .map(|obs| {
                Signal::from_z_score(obs.z_score, self.params.entry_upper, self.params.entry_lower)
            })
            .collect();
        let positions = forward_fill(&signals);

        let timestamps: Vec<_> = observations.iter().map(|o| o.timestamp).collect();
        let returns: Vec<f64> = observations.iter().map(|o| o.period_return).collect();
        let equity = EquityCurve::build(
            &timestamps,
            &positions,
            &returns,
            self.params.cost_per_trade,
        );

        debug!(
            observations = observations.len(),
            trades = equity.trades(),
            "simulation complete"
        );

        Ok(Simulation { positions, equity })
    }

    fn report(
        &self,
        simulation: Simulation,
        adf: AdfResult,
        hurst_exponent: f64,
    ) -> BacktestReport {
        let period_pnls = simulation.equity.period_pnls();
        let cumulative = simulation.equity.cumulative();

        BacktestReport {
            params: self.params.clone(),
            total_return: simulation.equity.total_return(),
            sharpe_ratio: sharpe_ratio(&period_pnls, self.params.periods_per_year),
            max_drawdown: max_drawdown(&cumulative),
            trades: simulation.equity.trades(),
            adf,
            hurst_exponent,
            equity: simulation.equity,
        }
    }
}
