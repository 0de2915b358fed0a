//! Configuration Loader
//!
//! Loads and validates backtest configuration from TOML files matching
//! config/default.toml structure. CLI flags override file values at the
//! binary layer.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::adapters::data::CsvColumns;
use crate::strategy::{BacktestParams, ParamsError};

/// Main configuration structure matching the TOML layout
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub backtest: BacktestSection,
    #[serde(default)]
    pub data: DataSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Backtest parameter section
#[derive(Debug, Clone, Deserialize)]
pub struct BacktestSection {
    /// Rolling window for the z-score (in periods)
    pub lookback: usize,
    /// Upper entry threshold (z above this triggers Short)
    pub entry_upper: f64,
    /// Lower entry threshold (z below this triggers Long)
    pub entry_lower: f64,
    /// Flat cost per position change ($ per unit)
    pub cost_per_trade: f64,
    /// Periods per year for Sharpe annualization
    #[serde(default = "default_periods_per_year")]
    pub periods_per_year: f64,
}

fn default_periods_per_year() -> f64 {
    252.0
}

/// Input data section
#[derive(Debug, Clone, Deserialize)]
pub struct DataSection {
    /// Default CSV path (CLI --data overrides)
    #[serde(default)]
    pub path: Option<String>,
    /// Timestamp column name
    #[serde(default = "default_timestamp_column")]
    pub timestamp_column: String,
    /// Spread column name
    #[serde(default = "default_spread_column")]
    pub spread_column: String,
}

fn default_timestamp_column() -> String {
    "date".to_string()
}

fn default_spread_column() -> String {
    "spread".to_string()
}

impl Default for DataSection {
    fn default() -> Self {
        Self {
            path: None,
            timestamp_column: default_timestamp_column(),
            spread_column: default_spread_column(),
        }
    }
}

/// Logging section
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Params(#[from] ParamsError),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    BacktestParams::from(&config).validate()?;
    Ok(config)
}

impl From<&Config> for BacktestParams {
    fn from(config: &Config) -> Self {
        BacktestParams {
            lookback: config.backtest.lookback,
            entry_upper: config.backtest.entry_upper,
            entry_lower: config.backtest.entry_lower,
            cost_per_trade: config.backtest.cost_per_trade,
            periods_per_year: config.backtest.periods_per_year,
        }
    }
}

impl From<&Config> for CsvColumns {
    fn from(config: &Config) -> Self {
        CsvColumns {
            timestamp: config.data.timestamp_column.clone(),
            spread: config.data.spread_column.clone(),
        }
    }
}
