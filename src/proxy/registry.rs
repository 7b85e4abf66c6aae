//! Provider registry
//!
//! The closed set of voice-AI providers the relay knows about, and the
//! immutable table resolving each one to its outbound URL.

use std::fmt;
use std::str::FromStr;

use crate::{
    config::Config,
    error::{AppError, AppResult},
};

/// A supported voice-AI provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    RetellAi,
    Vapi,
}

impl Provider {
    /// Every provider, in registry order
    pub const ALL: [Provider; 2] = [Provider::RetellAi, Provider::Vapi];

    /// Name used on the wire and in upstream error messages
    pub fn name(&self) -> &'static str {
        match self {
            Provider::RetellAi => "RetellAI",
            Provider::Vapi => "Vapi",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Provider {
    type Err = AppError;

    /// Exact, case-sensitive match against the wire names
    fn from_str(s: &str) -> AppResult<Self> {
        Provider::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or(AppError::UnsupportedProvider)
    }
}

/// Immutable provider → endpoint table
///
/// Built once at startup. A provider without a resolved URL is known but
/// unsupported; requests for it fail the same way an unknown name does.
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    retellai: Option<String>,
    vapi: Option<String>,
}

impl ProviderRegistry {
    /// Build the registry from configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            retellai: Some(config.retellai_api_url.clone()),
            vapi: config.vapi_api_url.clone(),
        }
    }

    /// Registry with explicit endpoints
    pub fn with_urls(retellai: Option<String>, vapi: Option<String>) -> Self {
        Self { retellai, vapi }
    }

    /// Endpoint for a provider, if one is configured
    pub fn url(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::RetellAi => self.retellai.as_deref(),
            Provider::Vapi => self.vapi.as_deref(),
        }
    }

    /// Resolve a wire name to its provider and endpoint
    pub fn resolve(&self, name: &str) -> AppResult<(Provider, &str)> {
        let provider: Provider = name.parse()?;
        let url = self.url(provider).ok_or(AppError::UnsupportedProvider)?;
        Ok((provider, url))
    }

    /// Whether a provider can currently be relayed to
    pub fn is_configured(&self, provider: Provider) -> bool {
        self.url(provider).is_some()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
