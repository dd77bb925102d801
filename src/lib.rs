//! Extracto Server Library
//!
//! Router construction lives here so integration tests can drive the
//! application without binding a socket. The server binary is in main.rs.

pub mod config;
pub mod error;
pub mod pdf;
pub mod routes;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;

/// Build the application router.
///
/// Executed once at process start: attach the permissive CORS policy, HTTP
/// tracing, and the request body limit, then bind the routes. No mutable
/// state is shared across requests.
pub fn app(config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(routes::extract::router())
        .layer(DefaultBodyLimit::max(config.upload.max_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
