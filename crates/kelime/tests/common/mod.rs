//! Common test utilities for card service tests.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create a successful JSON response.
pub fn json_response<T: serde::Serialize>(body: T) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// Create a service error response (`{"error": ...}` with the given status).
#[allow(dead_code)] // Not all test files use this
pub fn error_response(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(serde_json::json!({ "error": message }))
}

/// Mount a mock for a specific method and path.
pub async fn mock_endpoint(
    server: &MockServer,
    http_method: &str,
    endpoint: &str,
    response: ResponseTemplate,
) {
    Mock::given(method(http_method))
        .and(path(endpoint))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}
