//! Dataset Store subsystem for launchboard
//!
//! Loads and validates the launch-record table once at startup and derives
//! the static domain facts (distinct sites, payload bounds) that seed the
//! dashboard controls.
//!
//! # Design Principles
//!
//! - All-or-nothing loading: no dashboard without a valid dataset
//! - Missing columns are named, all at once
//! - The loaded dataset is immutable for the process lifetime
//! - Non-binary outcome values pass through; labeling them is the
//!   aggregator's concern

mod errors;
mod index;
mod loader;
mod record;

pub use errors::{DatasetError, DatasetErrorCode, DatasetResult};
pub use index::DomainIndex;
pub use loader::{
    DatasetLoader, BOOSTER_COLUMN, OUTCOME_COLUMN, PAYLOAD_COLUMN, REQUIRED_COLUMNS, SITE_COLUMN,
};
pub use record::{Dataset, LaunchRecord, OUTCOME_FAILURE, OUTCOME_SUCCESS};
