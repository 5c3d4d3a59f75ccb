//! Reactive binding subsystem for launchboard
//!
//! Owns the control state and maps named control-change events to the pure
//! chart computations. Events are handled synchronously, one at a time;
//! there is no notion of a previous chart influencing the next.

mod controls;
mod dashboard;

pub use controls::{
    control_panel, default_payload_range, ControlEvent, ControlPanel, ControlState, PayloadSlider,
    SiteDropdown, SLIDER_MARKS_KG, SLIDER_MAX_KG, SLIDER_MIN_KG, SLIDER_STEP_KG,
};
pub use dashboard::{ChartUpdate, Dashboard};
