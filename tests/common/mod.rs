//! Shared test helpers

use journals_import::api::ApiClient;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_USERNAME: &str = "admin";

/// Test context wrapping a mock Discourse server
pub struct TestContext {
    pub server: MockServer,
}

impl TestContext {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Build an API client pointed at the mock server
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.server.uri(), TEST_API_KEY, TEST_USERNAME)
            .expect("Failed to create API client")
    }
}

/// Generate `n` journal records with sequential ISSNs
pub fn journal_records(n: usize) -> Vec<Value> {
    (0..n)
        .map(|i| {
            json!({
                "issn": format!("{:04}-{:04}", i / 10000, i % 10000),
                "title": format!("Journal {i}")
            })
        })
        .collect()
}
