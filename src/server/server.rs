//! # HTTP Server
//!
//! Binds the combined router and serves the Data IO endpoints.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::actions::Connector;
use crate::auth::JwtVerifier;
use crate::observability::{Logger, Severity};

use super::config::ServerConfig;
use super::routes::{dataio_routes, health_routes, ConnectorState};

/// HTTP server for the Data IO connector
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new server with default configuration
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Create a new server with custom configuration
    pub fn with_config(config: ServerConfig) -> Self {
        let router = Self::build_router(&config);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &ServerConfig) -> Router {
        let state = Arc::new(ConnectorState::new(
            Connector::in_memory(),
            JwtVerifier::new(config.auth.clone()),
        ));

        // Permissive CORS when no origins are configured (development)
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
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
            .nest("/dataio/v1", dataio_routes(state))
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
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid socket address"))?;

        Logger::log(
            Severity::Info,
            "server_started",
            &[("addr", &addr.to_string())],
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new();
        assert_eq!(server.socket_addr(), "0.0.0.0:8787");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = ServerConfig::with_port(9090);
        let server = HttpServer::with_config(config);
        assert_eq!(server.socket_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_router_builds() {
        let server = HttpServer::new();
        let _router = server.router();
    }

    #[test]
    fn test_router_builds_with_cors_origins() {
        let config = ServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let _router = HttpServer::with_config(config).router();
    }
}
