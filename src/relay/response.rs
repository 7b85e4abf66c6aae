//! Relay handler output

use axum::{
    body::Body,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde_json::Value;

use crate::{
    error::{AppError, ErrorResponse},
    relay::cors,
};

/// Status, headers and body produced for one relay request
#[derive(Debug, Clone)]
pub struct RelayResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RelayResponse {
    /// 204 answer to a CORS preflight
    pub fn preflight() -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            headers: cors::preflight_headers(),
            body: Bytes::new(),
        }
    }

    /// 200 carrying the provider payload
    pub fn success(payload: &Value) -> Self {
        match serde_json::to_vec(payload) {
            Ok(body) => Self {
                status: StatusCode::OK,
                headers: cors::success_headers(),
                body: Bytes::from(body),
            },
            Err(e) => Self::from_error(&AppError::from(e)),
        }
    }

    /// Error envelope for a failed relay
    pub fn from_error(err: &AppError) -> Self {
        let body = serde_json::to_vec(&ErrorResponse::from(err))
            .map(Bytes::from)
            .unwrap_or_else(|_| Bytes::from_static(br#"{"error":"Internal error"}"#));

        Self {
            status: err.status_code(),
            headers: cors::error_headers(),
            body,
        }
    }

    /// Body decoded as JSON
    #[cfg(test)]
    pub fn json(&self) -> serde_json::Result<Value> {
        serde_json::from_slice(&self.body)
    }
}

impl IntoResponse for RelayResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}
