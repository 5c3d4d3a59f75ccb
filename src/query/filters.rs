//! Record filtering for the dashboard pipeline
//!
//! Filters records strictly: inclusive payload bounds, exact site match,
//! AND semantics. The filter is stable (dataset order is preserved) and
//! never mutates its input.

use crate::dataset::{Dataset, LaunchRecord};

/// Wire value selecting every site
pub const SITE_ALL: &str = "ALL";

/// Site selection from the dropdown control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    /// Every site passes the site test
    All,
    /// Only records whose site equals the name, exact match
    Site(String),
}

impl SiteSelection {
    /// Parses the wire value: `"ALL"` selects every site, anything else
    /// names a concrete site.
    pub fn parse(raw: &str) -> Self {
        if raw == SITE_ALL {
            SiteSelection::All
        } else {
            SiteSelection::Site(raw.to_string())
        }
    }

    /// Whether a record's site passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => site == name,
        }
    }

    /// The concrete site name, if one is selected.
    pub fn site_name(&self) -> Option<&str> {
        match self {
            SiteSelection::All => None,
            SiteSelection::Site(name) => Some(name),
        }
    }
}

/// Inclusive payload-mass range in kilograms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Inclusive on both ends. An inverted range contains nothing.
    pub fn contains(&self, payload_kg: f64) -> bool {
        self.low <= payload_kg && payload_kg <= self.high
    }
}

/// Filters the dataset by site selection AND payload range.
///
/// Returns references in dataset order. An inverted range or an unknown
/// site yields an empty view, not an error.
pub fn filter<'a>(
    dataset: &'a Dataset,
    site: &SiteSelection,
    range: &PayloadRange,
) -> Vec<&'a LaunchRecord> {
    dataset
        .iter()
        .filter(|r| site.matches(&r.site) && range.contains(r.payload_kg))
        .collect()
}
