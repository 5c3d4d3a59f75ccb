//! Reactive dashboard: control events in, chart payloads out
//!
//! Events are applied synchronously, one at a time, each running to
//! completion. The dataset is read-only shared state; only the control
//! state mutates, and only here. Each handler recomputes exactly the
//! charts that depend on the control that changed: a site change feeds
//! both charts, a payload-range change feeds the correlation chart only.

use std::sync::Arc;

use crate::charts::{correlation_chart, distribution_chart, PieChart, ScatterChart};
use crate::dataset::{Dataset, DomainIndex};
use crate::query::{PayloadRange, SiteSelection};

use super::controls::{control_panel, ControlEvent, ControlPanel, ControlState};

/// Charts recomputed by one control event. `distribution` is absent when
/// the event did not touch a control that chart depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartUpdate {
    pub distribution: Option<PieChart>,
    pub correlation: ScatterChart,
}

/// Long-lived dashboard over one loaded dataset.
pub struct Dashboard {
    dataset: Arc<Dataset>,
    index: DomainIndex,
    state: ControlState,
}

impl Dashboard {
    /// Opens the dashboard in its initial control state.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let index = DomainIndex::build(&dataset);
        let state = ControlState::initial(&index);
        Self {
            dataset,
            index,
            state,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn index(&self) -> &DomainIndex {
        &self.index
    }

    pub fn state(&self) -> &ControlState {
        &self.state
    }

    /// Control descriptions for the presentation layer.
    pub fn controls(&self) -> ControlPanel {
        control_panel(&self.index)
    }

    /// Renders both charts for the current control state.
    pub fn render(&self) -> (PieChart, ScatterChart) {
        (
            distribution_chart(&self.dataset, &self.state.site),
            correlation_chart(&self.dataset, &self.state.site, &self.state.payload_range),
        )
    }

    /// Applies one control-change event and returns the recomputed charts.
    pub fn apply(&mut self, event: ControlEvent) -> ChartUpdate {
        match event {
            ControlEvent::SiteChanged(raw) => self.on_site_changed(&raw),
            ControlEvent::PayloadRangeChanged { low_kg, high_kg } => {
                self.on_payload_range_changed(low_kg, high_kg)
            }
        }
    }

    /// Site selection drives both charts.
    fn on_site_changed(&mut self, raw: &str) -> ChartUpdate {
        self.state.site = SiteSelection::parse(raw);
        ChartUpdate {
            distribution: Some(distribution_chart(&self.dataset, &self.state.site)),
            correlation: correlation_chart(
                &self.dataset,
                &self.state.site,
                &self.state.payload_range,
            ),
        }
    }

    /// The payload range drives the correlation chart only.
    fn on_payload_range_changed(&mut self, low_kg: f64, high_kg: f64) -> ChartUpdate {
        self.state.payload_range = PayloadRange::new(low_kg, high_kg);
        ChartUpdate {
            distribution: None,
            correlation: correlation_chart(
                &self.dataset,
                &self.state.site,
                &self.state.payload_range,
            ),
        }
    }
}
