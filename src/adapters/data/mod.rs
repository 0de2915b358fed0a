//! Data adapters
//!
//! CSV input for the spread series, CSV export of the equity curve, and
//! an Ornstein-Uhlenbeck generator for synthetic demo data.

pub mod csv_loader;
pub mod export;
pub mod synthetic;

pub use csv_loader::{load_spread_csv, CsvColumns, DataError};
pub use export::{write_equity_csv, write_spread_csv};
pub use synthetic::{generate_ou_series, OuParams};
