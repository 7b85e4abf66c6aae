//! Provider API client
//!
//! Issues the single outbound GET for a relay request and hands back the
//! provider's JSON body untouched.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    error::{AppError, AppResult},
    proxy::{headers::build_bearer_headers, provider::ProviderFetcher, registry::ProviderRegistry},
};

/// reqwest-backed provider client
#[derive(Clone)]
pub struct ProviderClient {
    client: reqwest::Client,
    registry: Arc<ProviderRegistry>,
}

impl ProviderClient {
    /// Create a new provider client
    pub fn new(client: reqwest::Client, registry: Arc<ProviderRegistry>) -> Self {
        Self { client, registry }
    }
}

#[async_trait]
impl ProviderFetcher for ProviderClient {
    async fn fetch(&self, provider: &str, api_key: &str) -> AppResult<Value> {
        let (provider, url) = self.registry.resolve(provider)?;
        let headers = build_bearer_headers(api_key)?;

        debug!(provider = %provider, url = %url, "Sending request to upstream");

        let response = self.client.get(url).headers(headers).send().await?;

        let status = response.status();
        info!(
            provider = %provider,
            status = %status.as_u16(),
            content_length = ?response.content_length(),
            "Response received from upstream"
        );

        if !status.is_success() {
            warn!(provider = %provider, status = %status, "Upstream returned an error status");
            return Err(AppError::Upstream {
                provider: provider.name().to_string(),
                status_text: status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or_else(|| status.as_str().to_string()),
            });
        }

        let result = response.json().await?;
        Ok(result)
    }
}
