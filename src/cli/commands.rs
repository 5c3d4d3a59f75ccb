//! CLI command implementations
//!
//! Startup sequence is strict: load config, load and validate the dataset,
//! then serve. A dataset failure at any step aborts the process; the
//! dashboard never serves without valid data.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::dataset::{Dataset, DatasetLoader, DomainIndex};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;
use crate::reaction::control_panel;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the launch-records CSV (required)
    pub data_path: String,

    /// Host to bind to (optional, default "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (optional, default 8050)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (optional, default permissive)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8050
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_path.trim().is_empty() {
            return Err(CliError::config_error("data_path must not be empty"));
        }
        if self.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }
        Ok(())
    }

    /// Get the dataset path as Path
    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_path)
    }

    /// Build the HTTP server config, optionally overriding the port.
    pub fn http_config(&self, port_override: Option<u16>) -> HttpServerConfig {
        HttpServerConfig {
            host: self.host.clone(),
            port: port_override.unwrap_or(self.port),
            cors_origins: self.cors_origins.clone(),
        }
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::Check { config } => check(&config),
        Command::Inspect { config } => inspect(&config),
    }
}

/// Load the dataset and serve the dashboard over HTTP
pub fn serve(config_path: &Path, port_override: Option<u16>) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let dataset = boot_dataset(&config)?;

    let server = HttpServer::new(config.http_config(port_override), dataset);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Load and validate the dataset, print a summary, and exit
pub fn check(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let dataset = boot_dataset(&config)?;
    let index = DomainIndex::build(&dataset);

    let (min, max) = index
        .payload_bounds()
        .map(|(lo, hi)| (json!(lo), json!(hi)))
        .unwrap_or((json!(null), json!(null)));

    let summary = json!({
        "rows": dataset.len(),
        "sites": index.distinct_sites(),
        "payload_min_kg": min,
        "payload_max_kg": max,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

/// Print the dashboard control descriptions and exit
pub fn inspect(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let dataset = boot_dataset(&config)?;
    let index = DomainIndex::build(&dataset);

    println!("{}", serde_json::to_string_pretty(&control_panel(&index))?);

    Ok(())
}

/// Load the dataset once; a failure here is fatal.
fn boot_dataset(config: &Config) -> CliResult<Arc<Dataset>> {
    let dataset = DatasetLoader::load(config.data_path()).map_err(|e| {
        Logger::fatal("DATASET_LOAD_FAILED", &[("error", &e.to_string())]);
        CliError::from(e)
    })?;

    Logger::info(
        "DATASET_LOADED",
        &[
            ("path", &config.data_path),
            ("rows", &dataset.len().to_string()),
        ],
    );

    Ok(Arc::new(dataset))
}
