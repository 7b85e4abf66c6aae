//! Provider fetch abstraction
//!
//! The relay handler talks to upstream providers only through this trait,
//! which keeps the handler testable without a network.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AppResult;

/// Fetches the JSON payload a provider exposes for a caller's API key
///
/// # Contract
///
/// Implementations MUST:
/// - Fail with `AppError::UnsupportedProvider` for names outside the registry
/// - Forward `api_key` unmodified as a bearer token
/// - Issue at most one outbound request, with no retries
/// - Return the upstream body as an opaque JSON value
#[async_trait]
pub trait ProviderFetcher: Send + Sync {
    /// Fetch the provider's payload
    async fn fetch(&self, provider: &str, api_key: &str) -> AppResult<Value>;
}
