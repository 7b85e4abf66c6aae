//! Relay endpoint
//!
//! Binds the relay handler to axum. All behavior lives in
//! [`crate::relay::handle`]; this layer only extracts the request parts.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method},
};

use crate::{
    error::ErrorResponse,
    relay::{self, RelayResponse},
    AppState,
};

/// Relay a provider request
///
/// Forwards `api_key` as a bearer token to the named provider and returns its
/// JSON payload unchanged. `OPTIONS` on the same path answers the CORS
/// preflight with 204.
#[utoipa::path(
    post,
    path = "/",
    tag = "Relay",
    request_body = crate::relay::RelayRequest,
    responses(
        (status = 200, description = "Provider payload, passed through verbatim", body = serde_json::Value),
        (status = 400, description = "Provider or API key missing", body = ErrorResponse),
        (status = 500, description = "Unsupported provider, upstream failure or malformed body", body = ErrorResponse)
    )
)]
pub async fn relay_handler(
    State(state): State<Arc<AppState>>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> RelayResponse {
    relay::handle(state.fetcher.as_ref(), &method, &headers, &body).await
}
