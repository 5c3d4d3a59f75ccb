//! Domain index derived from the loaded dataset
//!
//! Static facts computed once at startup and used to seed the UI controls:
//! the distinct site list and the observed payload bounds. The bounds seed
//! the slider default only; queries are never constrained by them.

use std::collections::BTreeSet;

use super::record::Dataset;

/// Distinct sites and payload extremes of a dataset.
#[derive(Debug, Clone)]
pub struct DomainIndex {
    sites: Vec<String>,
    payload_bounds: Option<(f64, f64)>,
}

impl DomainIndex {
    /// Computes the index. Pure and deterministic.
    pub fn build(dataset: &Dataset) -> Self {
        let sites: BTreeSet<&str> = dataset
            .iter()
            .map(|r| r.site.as_str())
            .filter(|s| !s.is_empty())
            .collect();

        let payload_bounds = dataset.iter().map(|r| r.payload_kg).fold(None, |acc, kg| {
            match acc {
                None => Some((kg, kg)),
                Some((min, max)) => Some((min.min(kg), max.max(kg))),
            }
        });

        Self {
            sites: sites.into_iter().map(String::from).collect(),
            payload_bounds,
        }
    }

    /// Unique site names in lexicographic order.
    pub fn distinct_sites(&self) -> &[String] {
        &self.sites
    }

    /// Observed (min, max) payload, or `None` for an empty dataset.
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        self.payload_bounds
    }
}
