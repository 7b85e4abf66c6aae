//! Configuration management for the provider relay
//!
//! Configuration is loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

/// Default RetellAI agent listing endpoint
pub const DEFAULT_RETELLAI_API_URL: &str = "https://api.retellai.com/list-agents";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// RetellAI endpoint the relay calls
    pub retellai_api_url: String,
    /// Vapi endpoint; Vapi requests are rejected while this is unset
    pub vapi_api_url: Option<String>,

    /// Log output format
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: non_empty_var("RELAY_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: non_empty_var("RELAY_PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("Invalid RELAY_PORT")?,

            retellai_api_url: non_empty_var("RETELLAI_API_URL")
                .unwrap_or_else(|| DEFAULT_RETELLAI_API_URL.to_string()),
            vapi_api_url: non_empty_var("VAPI_API_URL"),

            log_format: match non_empty_var("RELAY_LOG_FORMAT").as_deref() {
                None | Some("text") => LogFormat::Text,
                Some("json") => LogFormat::Json,
                Some(other) => anyhow::bail!("Invalid RELAY_LOG_FORMAT: {}", other),
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            retellai_api_url: DEFAULT_RETELLAI_API_URL.to_string(),
            vapi_api_url: None,
            log_format: LogFormat::Text,
        }
    }
}

/// Read an environment variable, treating an empty value as unset
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
