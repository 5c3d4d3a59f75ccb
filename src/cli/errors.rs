//! CLI-specific error types
//!
//! All CLI errors are fatal: startup either completes with a valid dataset
//! or the process exits. There is no degraded mode.

use std::fmt;
use std::io;

use crate::dataset::DatasetError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// Dataset failed to load or validate
    DatasetError,
    /// Server failed to start
    BootFailed,
    /// I/O error writing output
    IoError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "DASH_CLI_CONFIG_ERROR",
            Self::DatasetError => "DASH_CLI_DATASET_ERROR",
            Self::BootFailed => "DASH_CLI_BOOT_FAILED",
            Self::IoError => "DASH_CLI_IO_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// Boot failed
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<DatasetError> for CliError {
    fn from(e: DatasetError) -> Self {
        Self::new(CliErrorCode::DatasetError, e.to_string())
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::new(CliErrorCode::IoError, e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(CliErrorCode::IoError, format!("JSON error: {}", e))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CliErrorCode::ConfigError.code(), "DASH_CLI_CONFIG_ERROR");
        assert_eq!(CliErrorCode::DatasetError.code(), "DASH_CLI_DATASET_ERROR");
        assert_eq!(CliErrorCode::BootFailed.code(), "DASH_CLI_BOOT_FAILED");
    }

    #[test]
    fn test_dataset_error_conversion() {
        let err: CliError = DatasetError::columns_missing(vec!["class".into()]).into();
        assert_eq!(err.code(), &CliErrorCode::DatasetError);
        assert!(err.message().contains("class"));
    }
}
