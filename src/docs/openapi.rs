//! OpenAPI specification for the provider relay

use utoipa::OpenApi;

use crate::{
    error::ErrorResponse,
    relay::RelayRequest,
    routes::health::{HealthResponse, HealthStatus, ProviderStatus, SimpleHealthResponse},
};

/// OpenAPI specification for the provider relay
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Provider Relay API",
        version = "1.0.0",
        description = "Relays a caller-supplied API key to a voice-AI provider and returns its JSON payload"
    ),
    paths(
        crate::routes::relay::relay_handler,
        crate::routes::health::health_check,
        crate::routes::health::readiness_check,
        crate::routes::health::liveness_check
    ),
    components(
        schemas(
            RelayRequest,
            ErrorResponse,
            HealthStatus,
            ProviderStatus,
            HealthResponse,
            SimpleHealthResponse,
        )
    ),
    tags(
        (name = "Relay", description = "Provider relay endpoint"),
        (name = "Health", description = "Liveness and readiness checks")
    )
)]
pub struct RelayApiDoc;
