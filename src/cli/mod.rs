//! CLI module for launchboard
//!
//! Provides command-line interface for:
//! - serve: load the dataset and serve the dashboard over HTTP
//! - check: one-shot dataset validation and summary
//! - inspect: print the dashboard control descriptions

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check, inspect, run, run_command, serve, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
