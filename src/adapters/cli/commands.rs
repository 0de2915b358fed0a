//! CLI Command Definitions
//!
//! Subcommands for the crush spread backtester binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Crush Spread Mean Reversion Backtester
#[derive(Parser, Debug)]
#[command(
    name = "crush-backtester",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Mean reversion backtester for the soybean crush spread",
    long_about = "Backtests a z-score mean reversion signal on a crush spread series: \
                  fixed entry thresholds, forward-filled positions, flat per-trade \
                  costs, with ADF and Hurst diagnostics."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Backtest a spread series from a CSV file
    Run(RunCmd),

    /// Run only the stationarity and mean-reversion diagnostics
    Diagnose(DiagnoseCmd),

    /// Generate a synthetic mean-reverting series (and optionally backtest it)
    Simulate(SimulateCmd),
}

/// Backtest a CSV spread series
#[derive(Parser, Debug)]
pub struct RunCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the spread CSV (overrides the config file)
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Symmetric entry threshold in standard deviations
    #[arg(long, value_name = "Z")]
    pub entry_z: Option<f64>,

    /// Rolling window for the z-score
    #[arg(long, value_name = "PERIODS")]
    pub lookback: Option<usize>,

    /// Flat cost per position change ($ per unit)
    #[arg(long, value_name = "DOLLARS")]
    pub cost: Option<f64>,

    /// Write the equity curve to this CSV file
    #[arg(long, value_name = "FILE")]
    pub equity_out: Option<PathBuf>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Diagnostics only: ADF test and Hurst exponent
#[derive(Parser, Debug)]
pub struct DiagnoseCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the spread CSV (overrides the config file)
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Print results as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Generate a synthetic Ornstein-Uhlenbeck spread series
#[derive(Parser, Debug)]
pub struct SimulateCmd {
    /// Number of business-day periods to generate
    #[arg(long, value_name = "N", default_value = "780")]
    pub periods: usize,

    /// RNG seed for reproducible series
    #[arg(long, value_name = "SEED", default_value = "42")]
    pub seed: u64,

    /// Long-term equilibrium level
    #[arg(long, value_name = "MU", default_value = "1.50")]
    pub mu: f64,

    /// Mean reversion speed per step
    #[arg(long, value_name = "THETA", default_value = "0.1")]
    pub theta: f64,

    /// Volatility per step
    #[arg(long, value_name = "SIGMA", default_value = "0.05")]
    pub sigma: f64,

    /// Write the generated series to this CSV file
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Backtest the generated series with default parameters
    #[arg(long)]
    pub backtest: bool,

    /// Print the report as JSON instead of text (with --backtest)
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run() {
        let app = CliApp::try_parse_from([
            "crush-backtester",
            "run",
            "--data",
            "spread.csv",
            "--entry-z",
            "2.5",
            "--json",
        ])
        .unwrap();
        match app.command {
            Command::Run(cmd) => {
                assert_eq!(cmd.data.unwrap().to_str().unwrap(), "spread.csv");
                assert_eq!(cmd.entry_z, Some(2.5));
                assert!(cmd.json);
                assert!(cmd.config.is_none());
            }
            _ => panic!("expected Run"),
        }
    }

    #[test]
    fn test_parse_simulate_defaults() {
        let app = CliApp::try_parse_from(["crush-backtester", "simulate"]).unwrap();
        match app.command {
            Command::Simulate(cmd) => {
                assert_eq!(cmd.periods, 780);
                assert_eq!(cmd.seed, 42);
                assert_eq!(cmd.mu, 1.50);
                assert!(!cmd.backtest);
            }
            _ => panic!("expected Simulate"),
        }
    }

    #[test]
    fn test_global_verbose_flag() {
        let app =
            CliApp::try_parse_from(["crush-backtester", "diagnose", "--data", "x.csv", "-v"])
                .unwrap();
        assert!(app.verbose);
    }
}
