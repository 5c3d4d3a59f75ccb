//! CLI argument definitions using clap
//!
//! Commands:
//! - launchboard serve --config <path> [--port <port>]
//! - launchboard check --config <path>
//! - launchboard inspect --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// launchboard - A reactive launch-records dashboard service
#[derive(Parser, Debug)]
#[command(name = "launchboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the dataset and serve the dashboard over HTTP
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./launchboard.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load and validate the dataset, print a summary, and exit
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./launchboard.json")]
        config: PathBuf,
    },

    /// Print the dashboard control descriptions and exit
    Inspect {
        /// Path to configuration file
        #[arg(long, default_value = "./launchboard.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
