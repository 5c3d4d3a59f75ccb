//! Dataset loader for reading the launch-record table at startup
//!
//! Loading is all-or-nothing:
//! - unreadable source fails with DASH_DATA_UNREADABLE
//! - absent required columns fail with DASH_SCHEMA_COLUMN_MISSING, naming
//!   every missing column
//! - an empty or unparsable required cell fails with DASH_ROW_INVALID,
//!   naming the file line
//!
//! The loaded dataset is read-only for the remainder of the process.

use std::path::Path;

use csv::StringRecord;

use super::errors::{DatasetError, DatasetResult};
use super::record::{Dataset, LaunchRecord};

/// Column holding the launch site name
pub const SITE_COLUMN: &str = "Launch Site";
/// Column holding the binary outcome
pub const OUTCOME_COLUMN: &str = "class";
/// Column holding the payload mass in kilograms
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
/// Column holding the booster version category
pub const BOOSTER_COLUMN: &str = "Booster Version Category";

/// Columns the core pipeline depends on
pub const REQUIRED_COLUMNS: [&str; 4] =
    [SITE_COLUMN, OUTCOME_COLUMN, PAYLOAD_COLUMN, BOOSTER_COLUMN];

/// Resolved positions of the required columns in the header
struct ColumnLayout {
    site: usize,
    outcome: usize,
    payload: usize,
    booster: usize,
}

impl ColumnLayout {
    /// Resolves column positions, collecting every missing column before
    /// failing so the error names all of them at once.
    fn resolve(headers: &StringRecord) -> DatasetResult<Self> {
        let position = |name: &str| headers.iter().position(|h| h == name);

        let mut missing = Vec::new();
        for column in REQUIRED_COLUMNS {
            if position(column).is_none() {
                missing.push(column.to_string());
            }
        }
        if !missing.is_empty() {
            return Err(DatasetError::columns_missing(missing));
        }

        Ok(Self {
            site: position(SITE_COLUMN).unwrap_or_default(),
            outcome: position(OUTCOME_COLUMN).unwrap_or_default(),
            payload: position(PAYLOAD_COLUMN).unwrap_or_default(),
            booster: position(BOOSTER_COLUMN).unwrap_or_default(),
        })
    }
}

/// Reads and validates the launch-record CSV.
pub struct DatasetLoader;

impl DatasetLoader {
    /// Loads the dataset from a CSV file with a header row.
    pub fn load(path: &Path) -> DatasetResult<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(|e| DatasetError::unreadable(path.display(), e))?;

        let headers = reader
            .headers()
            .map_err(|e| DatasetError::unreadable(path.display(), e))?
            .clone();

        let layout = ColumnLayout::resolve(&headers)?;

        let mut records = Vec::new();
        for (i, row) in reader.records().enumerate() {
            // Header occupies line 1
            let line = i + 2;
            let row = row.map_err(|e| DatasetError::row_invalid(line, e))?;
            records.push(Self::parse_row(&layout, &row, line)?);
        }

        Ok(Dataset::from_records(records))
    }

    fn parse_row(
        layout: &ColumnLayout,
        row: &StringRecord,
        line: usize,
    ) -> DatasetResult<LaunchRecord> {
        let site = Self::required_cell(row, layout.site, SITE_COLUMN, line)?;
        let booster = Self::required_cell(row, layout.booster, BOOSTER_COLUMN, line)?;

        let payload_raw = Self::required_cell(row, layout.payload, PAYLOAD_COLUMN, line)?;
        let payload_kg: f64 = payload_raw.parse().map_err(|_| {
            DatasetError::row_invalid(
                line,
                format!("column '{}' is not a number: '{}'", PAYLOAD_COLUMN, payload_raw),
            )
        })?;
        if !payload_kg.is_finite() || payload_kg < 0.0 {
            return Err(DatasetError::row_invalid(
                line,
                format!(
                    "column '{}' must be a non-negative number, got {}",
                    PAYLOAD_COLUMN, payload_kg
                ),
            ));
        }

        let outcome_raw = Self::required_cell(row, layout.outcome, OUTCOME_COLUMN, line)?;
        let outcome: i64 = outcome_raw.parse().map_err(|_| {
            DatasetError::row_invalid(
                line,
                format!("column '{}' is not an integer: '{}'", OUTCOME_COLUMN, outcome_raw),
            )
        })?;

        Ok(LaunchRecord::new(site, payload_kg, outcome, booster))
    }

    /// Fetches a cell that must be present and non-empty.
    fn required_cell(
        row: &StringRecord,
        index: usize,
        column: &str,
        line: usize,
    ) -> DatasetResult<String> {
        let value = row.get(index).map(str::trim).unwrap_or("");
        if value.is_empty() {
            return Err(DatasetError::row_invalid(
                line,
                format!("column '{}' is empty", column),
            ));
        }
        Ok(value.to_string())
    }
}
