//! Dashboard HTTP Routes
//!
//! Endpoints for the control descriptions and the two chart payloads.
//! Every request is independent: the site and payload range arrive as
//! query parameters, so no control state is shared across clients. The
//! dataset and domain index are read-only shared state.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::charts::{correlation_chart, distribution_chart, PieChart, ScatterChart};
use crate::dataset::{Dataset, DomainIndex};
use crate::query::{PayloadRange, SiteSelection, SITE_ALL};
use crate::reaction::{control_panel, default_payload_range, ControlPanel};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// Read-only dashboard state shared across requests
pub struct DashboardState {
    pub dataset: Arc<Dataset>,
    pub index: DomainIndex,
}

impl DashboardState {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let index = DomainIndex::build(&dataset);
        Self { dataset, index }
    }
}

// ==================
// Request Types
// ==================

#[derive(Debug, Deserialize)]
pub struct DistributionQuery {
    #[serde(default)]
    pub site: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CorrelationQuery {
    #[serde(default)]
    pub site: Option<String>,
    /// Lower payload bound in kg; defaults to the observed dataset minimum
    #[serde(default)]
    pub low: Option<String>,
    /// Upper payload bound in kg; defaults to the observed dataset maximum
    #[serde(default)]
    pub high: Option<String>,
}

// ==================
// Dashboard Routes
// ==================

/// Create dashboard routes
pub fn dashboard_routes(state: Arc<DashboardState>) -> Router {
    Router::new()
        .route("/controls", get(controls_handler))
        .route("/charts/distribution", get(distribution_handler))
        .route("/charts/correlation", get(correlation_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn controls_handler(State(state): State<Arc<DashboardState>>) -> Json<ControlPanel> {
    Json(control_panel(&state.index))
}

/// The distribution chart reads the site parameter only; the payload range
/// does not feed this chart.
async fn distribution_handler(
    State(state): State<Arc<DashboardState>>,
    Query(query): Query<DistributionQuery>,
) -> ApiResult<Json<PieChart>> {
    let site = parse_site(query.site.as_deref());
    Ok(Json(distribution_chart(&state.dataset, &site)))
}

/// The correlation chart reads both controls.
async fn correlation_handler(
    State(state): State<Arc<DashboardState>>,
    Query(query): Query<CorrelationQuery>,
) -> ApiResult<Json<ScatterChart>> {
    let site = parse_site(query.site.as_deref());

    let (default_low, default_high) = default_payload_range(&state.index);
    let low = parse_bound(query.low.as_deref(), "low", default_low)?;
    let high = parse_bound(query.high.as_deref(), "high", default_high)?;
    let range = PayloadRange::new(low, high);

    Ok(Json(correlation_chart(&state.dataset, &site, &range)))
}

// ==================
// Helper Functions
// ==================

fn parse_site(raw: Option<&str>) -> SiteSelection {
    SiteSelection::parse(raw.unwrap_or(SITE_ALL))
}

fn parse_bound(raw: Option<&str>, name: &str, default: f64) -> ApiResult<f64> {
    match raw {
        None => Ok(default),
        Some(value) => {
            let parsed: f64 = value
                .parse()
                .map_err(|_| ApiError::invalid_param(name, format!("'{}' is not a number", value)))?;
            if !parsed.is_finite() {
                return Err(ApiError::invalid_param(name, "must be finite"));
            }
            Ok(parsed)
        }
    }
}
