//! Dashboard control descriptions and state
//!
//! The site dropdown offers `"ALL"` plus every distinct site. The payload
//! slider carries fixed nominal bounds and marks regardless of the data;
//! only its default handles come from the observed payload extremes.

use serde::Serialize;

use crate::dataset::DomainIndex;
use crate::query::{PayloadRange, SiteSelection, SITE_ALL};

/// Nominal lower bound of the payload slider (kg)
pub const SLIDER_MIN_KG: f64 = 0.0;
/// Nominal upper bound of the payload slider (kg)
pub const SLIDER_MAX_KG: f64 = 10000.0;
/// Slider step (kg)
pub const SLIDER_STEP_KG: f64 = 1000.0;
/// Fixed label marks on the slider (kg)
pub const SLIDER_MARKS_KG: [f64; 5] = [0.0, 2500.0, 5000.0, 7500.0, 10000.0];

/// Single-select site control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteDropdown {
    pub options: Vec<String>,
    pub default: String,
}

/// Dual-handle payload range control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayloadSlider {
    pub min_kg: f64,
    pub max_kg: f64,
    pub step_kg: f64,
    pub marks_kg: Vec<f64>,
    pub default_low_kg: f64,
    pub default_high_kg: f64,
}

/// Both controls, as consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlPanel {
    pub site_dropdown: SiteDropdown,
    pub payload_slider: PayloadSlider,
}

/// Describes the controls for a loaded dataset.
pub fn control_panel(index: &DomainIndex) -> ControlPanel {
    let mut options = vec![SITE_ALL.to_string()];
    options.extend(index.distinct_sites().iter().cloned());

    let (default_low, default_high) = default_payload_range(index);

    ControlPanel {
        site_dropdown: SiteDropdown {
            options,
            default: SITE_ALL.to_string(),
        },
        payload_slider: PayloadSlider {
            min_kg: SLIDER_MIN_KG,
            max_kg: SLIDER_MAX_KG,
            step_kg: SLIDER_STEP_KG,
            marks_kg: SLIDER_MARKS_KG.to_vec(),
            default_low_kg: default_low,
            default_high_kg: default_high,
        },
    }
}

/// Observed payload extremes, or the nominal bounds for an empty dataset.
pub fn default_payload_range(index: &DomainIndex) -> (f64, f64) {
    index
        .payload_bounds()
        .unwrap_or((SLIDER_MIN_KG, SLIDER_MAX_KG))
}

/// Current values of both controls.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl ControlState {
    /// State the dashboard opens with: every site, observed payload range.
    pub fn initial(index: &DomainIndex) -> Self {
        let (low, high) = default_payload_range(index);
        Self {
            site: SiteSelection::All,
            payload_range: PayloadRange::new(low, high),
        }
    }
}

/// A named control-change event delivered by the binding layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    /// The site dropdown changed; carries the wire value.
    SiteChanged(String),
    /// The payload slider changed; carries the new handles.
    PayloadRangeChanged { low_kg: f64, high_kg: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, LaunchRecord};

    fn sample_index() -> DomainIndex {
        DomainIndex::build(&Dataset::from_records(vec![
            LaunchRecord::new("B", 4000.0, 1, "FT"),
            LaunchRecord::new("A", 1000.0, 0, "v1.0"),
        ]))
    }

    #[test]
    fn test_dropdown_all_first_then_sorted_sites() {
        let panel = control_panel(&sample_index());
        assert_eq!(panel.site_dropdown.options, vec!["ALL", "A", "B"]);
        assert_eq!(panel.site_dropdown.default, "ALL");
    }

    #[test]
    fn test_slider_nominal_bounds_fixed() {
        let panel = control_panel(&sample_index());
        assert_eq!(panel.payload_slider.min_kg, 0.0);
        assert_eq!(panel.payload_slider.max_kg, 10000.0);
        assert_eq!(panel.payload_slider.marks_kg, vec![0.0, 2500.0, 5000.0, 7500.0, 10000.0]);
    }

    #[test]
    fn test_slider_defaults_from_observed_bounds() {
        let panel = control_panel(&sample_index());
        assert_eq!(panel.payload_slider.default_low_kg, 1000.0);
        assert_eq!(panel.payload_slider.default_high_kg, 4000.0);
    }

    #[test]
    fn test_empty_dataset_defaults_to_nominal_bounds() {
        let index = DomainIndex::build(&Dataset::default());
        let (low, high) = default_payload_range(&index);
        assert_eq!((low, high), (0.0, 10000.0));
    }

    #[test]
    fn test_initial_state() {
        let state = ControlState::initial(&sample_index());
        assert_eq!(state.site, SiteSelection::All);
        assert_eq!(state.payload_range, PayloadRange::new(1000.0, 4000.0));
    }
}
