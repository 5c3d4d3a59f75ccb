//! # HTTP Server
//!
//! Thin serving layer for the dashboard: binds the configured address and
//! exposes the control and chart endpoints. All computation happens in the
//! pure pipeline; this layer only translates requests.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::dataset::Dataset;
use crate::observability::Logger;

use super::config::HttpServerConfig;
use super::dashboard_routes::{dashboard_routes, DashboardState};
use super::health_routes::health_routes;

/// HTTP server for the launch-records dashboard
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over a loaded dataset.
    pub fn new(config: HttpServerConfig, dataset: Arc<Dataset>) -> Self {
        let router = Self::build_router(&config, dataset);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, dataset: Arc<Dataset>) -> Router {
        let state = Arc::new(DashboardState::new(dataset));

        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .nest("/dashboard", dashboard_routes(state))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        Logger::info("HTTP_SERVER_STARTED", &[("addr", &addr.to_string())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(HttpServerConfig::default(), Arc::new(Dataset::default()));
        assert_eq!(server.socket_addr(), "0.0.0.0:8050");
    }

    #[test]
    fn test_server_with_custom_port() {
        let server = HttpServer::new(
            HttpServerConfig::with_port(9000),
            Arc::new(Dataset::default()),
        );
        assert_eq!(server.socket_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_router_builds() {
        let server = HttpServer::new(HttpServerConfig::default(), Arc::new(Dataset::default()));
        let _router = server.router();
    }
}
