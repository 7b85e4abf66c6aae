//! Health check endpoints
//!
//! Provides endpoints for monitoring and container orchestration:
//! - `/health` - Full health check with provider configuration
//! - `/health/ready` - Readiness check
//! - `/health/live` - Liveness check

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{proxy::Provider, AppState};

/// Health status enum
#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Whether a provider has a resolved endpoint
#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProviderStatus {
    Configured,
    Unconfigured,
}

/// Full health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: String,
    pub providers: BTreeMap<String, ProviderStatus>,
}

/// Simple health response for liveness/readiness
#[derive(Debug, Serialize, ToSchema)]
pub struct SimpleHealthResponse {
    pub status: HealthStatus,
}

fn provider_statuses(state: &AppState) -> BTreeMap<String, ProviderStatus> {
    Provider::ALL
        .into_iter()
        .map(|provider| {
            let status = if state.registry.is_configured(provider) {
                ProviderStatus::Configured
            } else {
                ProviderStatus::Unconfigured
            };
            (provider.name().to_string(), status)
        })
        .collect()
}

fn any_configured(state: &AppState) -> bool {
    Provider::ALL
        .into_iter()
        .any(|provider| state.registry.is_configured(provider))
}

/// Full health check endpoint
///
/// Reports version, uptime and which providers can be relayed to.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "No provider is configured", body = HealthResponse)
    )
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthResponse>) {
    let (status_code, status) = if any_configured(&state) {
        (StatusCode::OK, HealthStatus::Healthy)
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, HealthStatus::Unhealthy)
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        providers: provider_statuses(&state),
    };

    (status_code, Json(response))
}

/// Readiness check endpoint
///
/// Returns 200 OK if at least one provider can be relayed to.
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Ready to relay", body = SimpleHealthResponse),
        (status = 503, description = "No provider is configured", body = SimpleHealthResponse)
    )
)]
pub async fn readiness_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<SimpleHealthResponse>) {
    if !any_configured(&state) {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(SimpleHealthResponse {
                status: HealthStatus::Unhealthy,
            }),
        );
    }

    (
        StatusCode::OK,
        Json(SimpleHealthResponse {
            status: HealthStatus::Healthy,
        }),
    )
}

/// Liveness check endpoint
///
/// Returns 200 OK if the application is alive.
#[utoipa::path(
    get,
    path = "/health/live",
    tag = "Health",
    responses(
        (status = 200, description = "Process is alive", body = SimpleHealthResponse)
    )
)]
pub async fn liveness_check() -> (StatusCode, Json<SimpleHealthResponse>) {
    (
        StatusCode::OK,
        Json(SimpleHealthResponse {
            status: HealthStatus::Healthy,
        }),
    )
}
