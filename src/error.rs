//! Error types for the provider relay
//!
//! Every failure is reported to the caller as a `{"error": "<message>"}`
//! envelope. Only missing request fields map to 400; everything else is 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::relay::RelayResponse;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Provider and API key are required")]
    MissingFields,

    #[error("Unsupported provider")]
    UnsupportedProvider,

    #[error("Failed to fetch data from {provider}: {status_text}")]
    Upstream {
        provider: String,
        status_text: String,
    },

    #[error("Invalid API key format")]
    InvalidApiKey,

    #[error("{0}")]
    HttpError(#[from] reqwest::Error),

    #[error("{0}")]
    JsonError(#[from] serde_json::Error),
}

impl AppError {
    /// HTTP status reported to the caller
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFields => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable failure message
    #[schema(example = "Provider and API key are required")]
    pub error: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        RelayResponse::from_error(&self).into_response()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
