//! Filter Engine Invariant Tests
//!
//! - Output is exactly the subset satisfying low <= payload <= high
//! - Widening the range never drops a record (monotonicity)
//! - "ALL" rejects no record; a concrete site matches exactly
//! - Dataset order is preserved (stable filter)
//! - Inverted ranges and empty datasets yield empty views, not errors

use launchboard::dataset::{Dataset, LaunchRecord};
use launchboard::query::{filter, PayloadRange, SiteSelection};

// =============================================================================
// Helper Functions
// =============================================================================

fn sample_dataset() -> Dataset {
    Dataset::from_records(vec![
        LaunchRecord::new("A", 1000.0, 1, "v1.0"),
        LaunchRecord::new("A", 2000.0, 0, "v1.0"),
        LaunchRecord::new("B", 3000.0, 1, "FT"),
        LaunchRecord::new("B", 4000.0, 1, "B4"),
    ])
}

fn full_range() -> PayloadRange {
    PayloadRange::new(0.0, 10000.0)
}

// =============================================================================
// Range Predicate Tests
// =============================================================================

/// Output is exactly the records inside the inclusive range.
#[test]
fn test_range_subset_exact() {
    let ds = sample_dataset();
    let view = filter(&ds, &SiteSelection::All, &PayloadRange::new(1500.0, 3500.0));

    let payloads: Vec<f64> = view.iter().map(|r| r.payload_kg).collect();
    assert_eq!(payloads, vec![2000.0, 3000.0]);

    for record in ds.iter() {
        let inside = 1500.0 <= record.payload_kg && record.payload_kg <= 3500.0;
        assert_eq!(view.iter().any(|r| *r == record), inside);
    }
}

/// Records on the boundary are included on both ends.
#[test]
fn test_bounds_inclusive_both_ends() {
    let ds = sample_dataset();
    let view = filter(&ds, &SiteSelection::All, &PayloadRange::new(1000.0, 4000.0));
    assert_eq!(view.len(), 4);
}

/// Every record kept by a narrow range is kept by any containing range.
#[test]
fn test_monotonic_under_widening() {
    let ds = sample_dataset();
    let ranges = [
        PayloadRange::new(2000.0, 3000.0),
        PayloadRange::new(1500.0, 3500.0),
        PayloadRange::new(500.0, 5000.0),
        full_range(),
    ];

    for window in ranges.windows(2) {
        let narrow = filter(&ds, &SiteSelection::All, &window[0]);
        let wide = filter(&ds, &SiteSelection::All, &window[1]);
        for record in &narrow {
            assert!(
                wide.iter().any(|r| r == record),
                "record lost when range widened"
            );
        }
    }
}

/// An inverted range yields an empty view rather than raising.
#[test]
fn test_inverted_range_empty_not_error() {
    let ds = sample_dataset();
    let view = filter(&ds, &SiteSelection::All, &PayloadRange::new(9000.0, 100.0));
    assert!(view.is_empty());
}

// =============================================================================
// Site Predicate Tests
// =============================================================================

/// The ALL selection rejects no record.
#[test]
fn test_all_sites_rejects_nothing() {
    let ds = sample_dataset();
    let view = filter(&ds, &SiteSelection::All, &full_range());
    assert_eq!(view.len(), ds.len());
}

/// A concrete site accepts exactly its own records.
#[test]
fn test_concrete_site_exact() {
    let ds = sample_dataset();
    for site in ["A", "B"] {
        let view = filter(&ds, &SiteSelection::parse(site), &full_range());
        let expected = ds.iter().filter(|r| r.site == site).count();
        assert_eq!(view.len(), expected);
        assert!(view.iter().all(|r| r.site == site));
    }
}

/// Site matching is exact, not prefix or case-insensitive.
#[test]
fn test_site_match_is_exact() {
    let ds = sample_dataset();
    assert!(filter(&ds, &SiteSelection::parse("a"), &full_range()).is_empty());
    assert!(filter(&ds, &SiteSelection::parse("A "), &full_range()).is_empty());
}

// =============================================================================
// Combined Predicate Tests
// =============================================================================

/// Both predicates must pass (AND semantics).
#[test]
fn test_predicates_combine_with_and() {
    let ds = sample_dataset();
    let view = filter(
        &ds,
        &SiteSelection::parse("B"),
        &PayloadRange::new(0.0, 3500.0),
    );
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].payload_kg, 3000.0);
}

/// Filtering preserves the dataset's relative order.
#[test]
fn test_filter_is_stable() {
    let ds = Dataset::from_records(vec![
        LaunchRecord::new("A", 4000.0, 1, "v1.0"),
        LaunchRecord::new("A", 1000.0, 0, "v1.0"),
        LaunchRecord::new("A", 3000.0, 1, "v1.0"),
    ]);
    let view = filter(&ds, &SiteSelection::All, &full_range());
    let payloads: Vec<f64> = view.iter().map(|r| r.payload_kg).collect();
    assert_eq!(payloads, vec![4000.0, 1000.0, 3000.0]);
}

/// An empty dataset is a valid input yielding an empty view.
#[test]
fn test_empty_dataset_valid() {
    let ds = Dataset::default();
    assert!(filter(&ds, &SiteSelection::All, &full_range()).is_empty());
}
