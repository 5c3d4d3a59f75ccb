//! Launch record and dataset types
//!
//! A `Dataset` is built once at startup and treated as read-only for the
//! process lifetime. Records keep their file order; filtering and
//! aggregation never mutate them.

/// Raw outcome value meaning a failed launch
pub const OUTCOME_FAILURE: i64 = 0;
/// Raw outcome value meaning a successful launch
pub const OUTCOME_SUCCESS: i64 = 1;

/// One launch: site, payload mass, binary outcome, booster category.
///
/// The outcome is kept as the raw integer from the source file. Values other
/// than 0/1 survive loading; the distribution aggregator labels them
/// defensively instead of rejecting the row.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Launch site name (non-empty)
    pub site: String,
    /// Payload mass in kilograms (non-negative, finite)
    pub payload_kg: f64,
    /// Raw outcome value (0 = failure, 1 = success)
    pub outcome: i64,
    /// Booster version category label (non-empty)
    pub booster_category: String,
}

impl LaunchRecord {
    pub fn new(
        site: impl Into<String>,
        payload_kg: f64,
        outcome: i64,
        booster_category: impl Into<String>,
    ) -> Self {
        Self {
            site: site.into(),
            payload_kg,
            outcome,
            booster_category: booster_category.into(),
        }
    }

    /// Whether this launch succeeded
    pub fn is_success(&self) -> bool {
        self.outcome == OUTCOME_SUCCESS
    }
}

/// Ordered, immutable sequence of launch records.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
}

impl Dataset {
    /// Build a dataset from already-validated records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        Self { records }
    }

    /// All records in file order.
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LaunchRecord> {
        self.records.iter()
    }
}
