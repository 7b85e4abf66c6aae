//! Common test utilities for the provider relay
//!
//! Builds the real router against mocked provider endpoints.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use provider_relay::{routes::create_router, AppState, Config};

use crate::mocks::MockProviderApi;

/// Test configuration constants
pub mod constants {
    /// API key the mocked providers accept
    pub const TEST_API_KEY: &str = "abc123";
    /// Key the mocks never accept
    pub const BAD_API_KEY: &str = "expired-key";
}

/// Relay configuration pointing at the mock server
///
/// Vapi is configured only when `with_vapi` is set.
pub fn test_config(mock: &MockProviderApi, with_vapi: bool) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        retellai_api_url: mock.retellai_url(),
        vapi_api_url: with_vapi.then(|| mock.vapi_url()),
        ..Config::default()
    }
}

/// Test server running the full router
pub fn test_server(config: Config) -> TestServer {
    let state = Arc::new(AppState::new(config).expect("Failed to build app state"));
    TestServer::new(create_router(state)).expect("Failed to create test server")
}
