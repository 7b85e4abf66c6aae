//! Mock voice-AI provider APIs for testing
//!
//! Both providers are served from one wiremock server on distinct paths:
//! - GET /list-agents - RetellAI
//! - GET /vapi/assistant - Vapi
//!
//! # Example
//!
//! ```rust,ignore
//! let mock = MockProviderApi::start().await;
//! mock.mock_agents_success("abc123", json!({"agents": []})).await;
//! // Point RETELLAI_API_URL at mock.retellai_url()
//! ```

#![allow(dead_code)]

use serde_json::Value;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const RETELLAI_PATH: &str = "/list-agents";
pub const VAPI_PATH: &str = "/vapi/assistant";

/// Mock provider API server wrapper
pub struct MockProviderApi {
    server: MockServer,
}

impl MockProviderApi {
    /// Start a new mock provider server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get the mock server URI
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Endpoint standing in for the RetellAI agent listing
    pub fn retellai_url(&self) -> String {
        format!("{}{}", self.server.uri(), RETELLAI_PATH)
    }

    /// Endpoint standing in for Vapi
    pub fn vapi_url(&self) -> String {
        format!("{}{}", self.server.uri(), VAPI_PATH)
    }

    /// Number of requests the server has seen
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }

    /// RetellAI answers `body` for exactly one request bearing `api_key`
    pub async fn mock_agents_success(&self, api_key: &str, body: Value) {
        Self::bearer_get(RETELLAI_PATH, api_key)
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Vapi answers `body` for exactly one request bearing `api_key`
    pub async fn mock_vapi_success(&self, api_key: &str, body: Value) {
        Self::bearer_get(VAPI_PATH, api_key)
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// RetellAI rejects every request with `status`
    pub async fn mock_agents_status(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path(RETELLAI_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(serde_json::json!({
                "error_message": "upstream rejected the request"
            })))
            .mount(&self.server)
            .await;
    }

    /// RetellAI answers 200 with a body that is not JSON
    pub async fn mock_agents_invalid_body(&self) {
        Mock::given(method("GET"))
            .and(path(RETELLAI_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&self.server)
            .await;
    }

    /// Fail the test if any request reaches the server
    pub async fn expect_no_requests(&self) {
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    fn bearer_get(endpoint: &str, api_key: &str) -> wiremock::MockBuilder {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .and(header("Authorization", format!("Bearer {}", api_key).as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_urls_share_server() {
        let mock = MockProviderApi::start().await;

        assert!(mock.retellai_url().starts_with(&mock.uri()));
        assert!(mock.retellai_url().ends_with("/list-agents"));
        assert!(mock.vapi_url().ends_with("/vapi/assistant"));
        assert_eq!(mock.request_count().await, 0);
    }
}
