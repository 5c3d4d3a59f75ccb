//! Dataset error types
//!
//! Error codes:
//! - DASH_DATA_UNREADABLE (FATAL)
//! - DASH_SCHEMA_COLUMN_MISSING (FATAL)
//! - DASH_ROW_INVALID (FATAL)
//!
//! Every dataset error is fatal at startup: the dashboard never serves
//! without a fully loaded, validated dataset. No partial loads.

use std::fmt;

/// Dataset-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetErrorCode {
    /// Dataset file missing or unreadable
    DataUnreadable,
    /// One or more required columns absent from the header
    SchemaColumnMissing,
    /// A row holds an empty or unparsable required cell
    RowInvalid,
}

impl DatasetErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            DatasetErrorCode::DataUnreadable => "DASH_DATA_UNREADABLE",
            DatasetErrorCode::SchemaColumnMissing => "DASH_SCHEMA_COLUMN_MISSING",
            DatasetErrorCode::RowInvalid => "DASH_ROW_INVALID",
        }
    }
}

impl fmt::Display for DatasetErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Dataset error with full context
#[derive(Debug)]
pub struct DatasetError {
    /// Error code
    code: DatasetErrorCode,
    /// Human-readable message
    message: String,
    /// Missing column names, if applicable
    columns: Vec<String>,
    /// 1-based file line of the offending row, if applicable
    row: Option<usize>,
}

impl DatasetError {
    /// Create an unreadable-source error
    pub fn unreadable(path: impl fmt::Display, reason: impl fmt::Display) -> Self {
        Self {
            code: DatasetErrorCode::DataUnreadable,
            message: format!("Failed to read dataset '{}': {}", path, reason),
            columns: Vec::new(),
            row: None,
        }
    }

    /// Create a missing-columns error naming every absent column
    pub fn columns_missing(mut columns: Vec<String>) -> Self {
        columns.sort();
        Self {
            code: DatasetErrorCode::SchemaColumnMissing,
            message: format!("Required columns missing: {}", columns.join(", ")),
            columns,
            row: None,
        }
    }

    /// Create an invalid-row error naming the file line
    pub fn row_invalid(row: usize, reason: impl fmt::Display) -> Self {
        Self {
            code: DatasetErrorCode::RowInvalid,
            message: format!("Row {}: {}", row, reason),
            columns: Vec::new(),
            row: Some(row),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> DatasetErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the missing column names, if applicable
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the offending file line, if applicable
    pub fn row(&self) -> Option<usize> {
        self.row
    }

    /// Dataset errors always abort startup
    pub fn is_fatal(&self) -> bool {
        true
    }
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[FATAL] {}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for DatasetError {}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DatasetErrorCode::DataUnreadable.code(), "DASH_DATA_UNREADABLE");
        assert_eq!(
            DatasetErrorCode::SchemaColumnMissing.code(),
            "DASH_SCHEMA_COLUMN_MISSING"
        );
        assert_eq!(DatasetErrorCode::RowInvalid.code(), "DASH_ROW_INVALID");
    }

    #[test]
    fn test_columns_missing_sorted() {
        let err = DatasetError::columns_missing(vec!["class".into(), "Launch Site".into()]);
        assert_eq!(err.columns(), &["Launch Site".to_string(), "class".to_string()]);
        assert!(err.message().contains("Launch Site"));
        assert!(err.message().contains("class"));
    }

    #[test]
    fn test_row_invalid_names_row() {
        let err = DatasetError::row_invalid(7, "empty cell");
        assert_eq!(err.row(), Some(7));
        assert!(format!("{}", err).contains("Row 7"));
    }

    #[test]
    fn test_all_errors_fatal() {
        assert!(DatasetError::unreadable("x.csv", "gone").is_fatal());
        assert!(DatasetError::columns_missing(vec!["class".into()]).is_fatal());
        assert!(DatasetError::row_invalid(2, "bad").is_fatal());
    }
}
