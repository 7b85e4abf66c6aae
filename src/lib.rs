//! Provider Relay - CORS-enabled relay for voice-AI provider APIs
//!
//! Accepts `{provider, api_key}`, calls the provider's fixed endpoint with the
//! key as a bearer token, and returns the provider's JSON payload unchanged.

pub mod config;
pub mod docs;
pub mod error;
pub mod proxy;
pub mod relay;
pub mod routes;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::error::{AppError, AppResult};
pub use crate::proxy::{Provider, ProviderClient, ProviderFetcher, ProviderRegistry};
pub use crate::relay::{handle, RelayResponse};

/// Application state shared across all request handlers
///
/// Everything in here is read-only after startup.
pub struct AppState {
    pub start_time: Instant,
    /// Provider → endpoint table
    pub registry: Arc<ProviderRegistry>,
    /// Upstream fetcher used by the relay route
    pub fetcher: Arc<dyn ProviderFetcher>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        let registry = Arc::new(ProviderRegistry::from_config(&config));

        // Connection pooling only; the client's default timeouts are kept
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .build()?;

        let fetcher: Arc<dyn ProviderFetcher> =
            Arc::new(ProviderClient::new(http_client, registry.clone()));

        Ok(Self::with_fetcher(registry, fetcher))
    }

    /// Create a state around an explicit fetcher
    pub fn with_fetcher(registry: Arc<ProviderRegistry>, fetcher: Arc<dyn ProviderFetcher>) -> Self {
        Self {
            start_time: Instant::now(),
            registry,
            fetcher,
        }
    }
}
