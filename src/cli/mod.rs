//! Command-line front end for browsing the catalog and viewing dashboards

pub mod commands;
pub mod render;

pub use commands::{Cli, Commands, StatsCommand, run};
