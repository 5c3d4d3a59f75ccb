//! Filter Engine subsystem for launchboard
//!
//! Pure functions mapping (site selection, payload range) to a filtered
//! record view. Both predicates combine with AND semantics.
//!
//! # Invariants
//!
//! - Inclusive payload bounds on both ends
//! - `"ALL"` rejects no record; a concrete site matches exactly
//! - Stable: dataset order is preserved
//! - Empty views are valid results, never errors

mod filters;

pub use filters::{filter, PayloadRange, SiteSelection, SITE_ALL};
