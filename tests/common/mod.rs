//! Shared helpers for tests that run against a mock GraphQL endpoint.
#![allow(dead_code)]

use serde_json::Value;
use wikijs_admin::api::{self, GraphQlClient};
use wikijs_admin::config::Config;
use wikijs_admin::models::UserCreationRequest;
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";

pub struct TestContext {
    pub server: MockServer,
    pub client: GraphQlClient,
}

impl TestContext {
    pub async fn new() -> Self {
        api::set_silent(true);
        let server = MockServer::start().await;
        let config = Config::new(format!("{}/graphql", server.uri()), TOKEN);
        let client = GraphQlClient::new(config).expect("client");
        Self { server, client }
    }

    /// JSON bodies of every request the mock server received, in order.
    pub async fn request_bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| serde_json::from_slice(&r.body).expect("request body is JSON"))
            .collect()
    }
}

pub fn create_ok(id: i64) -> Value {
    serde_json::json!({
        "data": {"users": {"create": {
            "responseResult": {"succeeded": true, "message": "Ok"},
            "user": {"id": id}
        }}}
    })
}

pub fn create_rejected(message: &str) -> Value {
    serde_json::json!({
        "data": {"users": {"create": {
            "responseResult": {"succeeded": false, "message": message},
            "user": null
        }}}
    })
}

pub fn request_fixture(name: &str) -> UserCreationRequest {
    UserCreationRequest {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        password: "pw".to_string(),
        groups: vec![1],
        must_change_password: true,
        send_welcome_email: false,
    }
}
