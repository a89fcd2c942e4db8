/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for ledgerx-adapter tests

use ledgerx_adapter::{ClientConfig, Credentials, LedgerxClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Mock JWT token for testing
pub fn mock_jwt_token() -> String {
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.test.signature".to_string()
}

/// Client with both hosts pointed at the mock server
pub fn mock_client(server: &MockServer) -> LedgerxClient {
    LedgerxClient::with_config_and_base_urls(
        ClientConfig::default(),
        Credentials::new(mock_jwt_token()),
        &server.uri(),
        &server.uri(),
    )
    .expect("client init")
}
