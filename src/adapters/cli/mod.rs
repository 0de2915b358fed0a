//! CLI Adapter
//!
//! Command-line interface for the crush spread backtester.
//! Uses clap derive macros for argument parsing.

mod commands;

pub use commands::{CliApp, Command, DiagnoseCmd, RunCmd, SimulateCmd};
