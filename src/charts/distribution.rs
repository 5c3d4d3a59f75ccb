//! Outcome distribution aggregation feeding the pie-style chart
//!
//! Dispatch is on the site selection alone. The payload-range control does
//! not feed this chart; only the site dropdown does. The correlation chart
//! honors both controls, so the two aggregators intentionally differ on
//! which controls they read.

use std::collections::BTreeMap;

use crate::dataset::{Dataset, OUTCOME_FAILURE, OUTCOME_SUCCESS};
use crate::query::SiteSelection;

use super::figure::{PieChart, PieSlice};

/// Title of the all-sites distribution chart
pub const ALL_SITES_TITLE: &str = "Total Successful Launches by Site";

/// Builds the distribution chart for the current site selection.
///
/// - All sites: per-site success totals over the full dataset.
/// - Single site: failure/success counts for that site only.
pub fn distribution_chart(dataset: &Dataset, site: &SiteSelection) -> PieChart {
    match site {
        SiteSelection::All => all_sites_chart(dataset),
        SiteSelection::Site(name) => single_site_chart(dataset, name),
    }
}

/// Groups the full dataset by site; each slice value is the sum of the
/// site's outcome values, which for 0/1 outcomes is its success count.
fn all_sites_chart(dataset: &Dataset) -> PieChart {
    let mut successes_by_site: BTreeMap<&str, i64> = BTreeMap::new();
    for record in dataset.iter() {
        *successes_by_site.entry(record.site.as_str()).or_insert(0) += record.outcome;
    }

    PieChart {
        title: ALL_SITES_TITLE.to_string(),
        slices: successes_by_site
            .into_iter()
            .map(|(site, successes)| PieSlice::new(site, successes))
            .collect(),
    }
}

/// Counts occurrences of each raw outcome value at one site, ordered by
/// ascending raw value so "Failure" (0) precedes "Success" (1).
fn single_site_chart(dataset: &Dataset, site: &str) -> PieChart {
    let mut counts: BTreeMap<i64, i64> = BTreeMap::new();
    for record in dataset.iter().filter(|r| r.site == site) {
        *counts.entry(record.outcome).or_insert(0) += 1;
    }

    PieChart {
        title: format!("Total Launch Outcomes for site {}", site),
        slices: counts
            .into_iter()
            .map(|(outcome, count)| PieSlice::new(outcome_label(outcome), count))
            .collect(),
    }
}

/// Label for a raw outcome value. Values outside 0/1 fall back to their
/// decimal representation instead of aborting the aggregation.
pub fn outcome_label(raw: i64) -> String {
    match raw {
        OUTCOME_FAILURE => "Failure".to_string(),
        OUTCOME_SUCCESS => "Success".to_string(),
        other => other.to_string(),
    }
}
