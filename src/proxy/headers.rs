//! Header utilities for provider requests
//!
//! The caller's API key is the only thing forwarded upstream. Inbound
//! headers are never copied onto the outbound request.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

use crate::error::{AppError, AppResult};

/// Build the headers for an outbound provider request
///
/// Fails when the key cannot be carried in a header value
/// (control characters, newlines).
pub fn build_bearer_headers(api_key: &str) -> AppResult<HeaderMap> {
    let mut headers = HeaderMap::new();

    let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))
        .map_err(|_| AppError::InvalidApiKey)?;
    auth.set_sensitive(true);

    headers.insert(AUTHORIZATION, auth);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    Ok(headers)
}
