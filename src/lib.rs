//! Command-line front end for safest/shortest routing
//!
//! Loads a road network and collision data described by a TOML file, runs
//! the dual-objective router and reports both routes.

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::{Cli, Command};
pub use config::AppConfig;
