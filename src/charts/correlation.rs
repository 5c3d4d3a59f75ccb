//! Payload-vs-outcome projection feeding the scatter chart
//!
//! Applies the Filter Engine with both controls active (site AND payload
//! range) and projects each surviving record into a point, values
//! unchanged. No aggregation.

use crate::dataset::Dataset;
use crate::query::{filter, PayloadRange, SiteSelection};

use super::figure::{ScatterChart, ScatterPoint};

/// Title of the all-sites correlation chart
pub const ALL_SITES_TITLE: &str = "Correlation between Payload and Success for all Sites";

/// Builds the correlation chart for the current control state.
pub fn correlation_chart(
    dataset: &Dataset,
    site: &SiteSelection,
    range: &PayloadRange,
) -> ScatterChart {
    let points = filter(dataset, site, range)
        .into_iter()
        .map(|record| ScatterPoint {
            payload_kg: record.payload_kg,
            outcome: record.outcome,
            booster_category: record.booster_category.clone(),
        })
        .collect();

    let title = match site.site_name() {
        Some(name) => format!("Correlation between Payload and Success for site {}", name),
        None => ALL_SITES_TITLE.to_string(),
    };

    ScatterChart { title, points }
}
