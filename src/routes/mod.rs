//! HTTP routes for the provider relay
//!
//! This module defines all HTTP endpoints exposed by the service.

pub mod docs;
pub mod health;
pub mod metrics;
pub mod relay;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{any, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // Operational routes get a permissive CORS layer; the relay route writes
    // its own CORS headers and must not be wrapped by it
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let ops_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .route("/metrics", get(metrics::prometheus_metrics))
        .merge(docs::create_docs_router())
        .layer(cors);

    // Every method is dispatched to the relay; OPTIONS is the preflight.
    // No body limit: a 413 from the extractor would bypass the CORS envelope
    let relay_routes = Router::new()
        .route("/", any(relay::relay_handler))
        .layer(DefaultBodyLimit::disable());

    Router::new()
        .merge(ops_routes)
        .merge(relay_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
