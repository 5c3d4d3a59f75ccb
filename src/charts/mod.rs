//! Aggregator subsystem for launchboard
//!
//! Two pure transforms over the dataset produce the chart payloads:
//!
//! 1. Outcome distribution (pie-style): driven by the site selection only.
//! 2. Payload-vs-outcome correlation (scatter): driven by site selection
//!    AND payload range.
//!
//! That the distribution chart ignores the payload-range control while the
//! correlation chart honors it is deliberate, reproduced behavior; see
//! DESIGN.md before changing it.

mod correlation;
mod distribution;
mod figure;

pub use correlation::{correlation_chart, ALL_SITES_TITLE as CORRELATION_ALL_SITES_TITLE};
pub use distribution::{
    distribution_chart, outcome_label, ALL_SITES_TITLE as DISTRIBUTION_ALL_SITES_TITLE,
};
pub use figure::{PieChart, PieSlice, ScatterChart, ScatterPoint};
