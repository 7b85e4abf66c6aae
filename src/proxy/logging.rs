//! Request logging utilities for provider relaying
//!
//! Provides structured logging with correlation IDs so a single relay request
//! can be followed from the inbound call to the upstream response.

use std::time::Instant;
use tracing::{error, info, Span};
use uuid::Uuid;

/// Context for tracking a relay request through the system
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique identifier for this request (for log correlation)
    pub trace_id: String,
    /// When the request started
    pub start_time: Instant,
    /// Provider name as supplied by the caller
    pub provider: String,
}

impl RequestContext {
    /// Create a new request context
    pub fn new(provider: &str) -> Self {
        Self {
            trace_id: Uuid::new_v4().to_string()[..8].to_string(), // Short ID for readability
            start_time: Instant::now(),
            provider: provider.to_string(),
        }
    }

    /// Get elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u128 {
        self.start_time.elapsed().as_millis()
    }

    /// Log request initiation
    pub fn log_request_start(&self, origin: Option<&str>) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            origin = ?origin,
            "Relay request started"
        );
    }

    /// Log successful request completion
    pub fn log_request_complete(&self) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            elapsed_ms = %self.elapsed_ms(),
            "Relay request completed successfully"
        );
    }

    /// Log request failure
    pub fn log_error(&self, error: &str) {
        error!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            elapsed_ms = %self.elapsed_ms(),
            error = %error,
            "Relay request failed"
        );
    }

    /// Create a tracing span for this request
    pub fn create_span(&self) -> Span {
        tracing::info_span!(
            "relay_request",
            trace_id = %self.trace_id,
            provider = %self.provider,
        )
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new("unknown")
    }
}
