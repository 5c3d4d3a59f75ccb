//! # Launchboard HTTP Server Module
//!
//! HTTP surface for the dashboard: control descriptions and the two chart
//! payloads, re-emitted on every request. Chart rendering and page
//! assembly belong to the presentation layer consuming these endpoints.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/dashboard/controls` - Site dropdown and payload slider descriptions
//! - `/dashboard/charts/distribution?site=` - Outcome distribution chart
//! - `/dashboard/charts/correlation?site=&low=&high=` - Correlation chart

pub mod config;
pub mod dashboard_routes;
pub mod errors;
pub mod health_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use dashboard_routes::DashboardState;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
