//! # HTTP Server
//!
//! Axum transport for the Data IO actions: routing, CORS, bearer
//! credential extraction and server configuration.

pub mod config;
pub mod routes;
pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use routes::{dataio_routes, health_routes, ConnectorState};
pub use server::HttpServer;
