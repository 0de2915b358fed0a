//! Adapters Layer - external interfaces
//!
//! - `cli`: clap command definitions
//! - `data`: CSV load/export and synthetic series generation

pub mod cli;
pub mod data;
