//! GraphQL client behaviour against a mock endpoint.

mod common;

use common::{create_ok, create_rejected, request_fixture, TestContext, TOKEN};
use serde_json::json;
use wikijs_admin::api::{create_user, list_groups, list_users, ApiError, GraphQlClient};
use wikijs_admin::config::Config;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_query_sends_bearer_token_and_omits_variables() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("Authorization", format!("Bearer {}", TOKEN).as_str()))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"users": {"list": []}}
        })))
        .mount(&ctx.server)
        .await;

    let users = list_users(&ctx.client).await.expect("list users");
    assert!(users.is_empty());

    let bodies = ctx.request_bodies().await;
    assert_eq!(bodies.len(), 1);
    assert!(bodies[0]["query"].as_str().unwrap().contains("isActive"));
    assert!(bodies[0].get("variables").is_none());
}

#[tokio::test]
async fn test_create_user_sends_variables() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": {
                "email": "alice@example.com",
                "passwordRaw": "pw",
                "groups": [1],
                "mustChangePassword": true,
                "sendWelcomeEmail": false
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_ok(42)))
        .mount(&ctx.server)
        .await;

    let payload = create_user(&ctx.client, &request_fixture("Alice"))
        .await
        .expect("create user");
    assert!(payload.response_result.succeeded);
    assert_eq!(payload.user.map(|u| u.id), Some(42));

    let bodies = ctx.request_bodies().await;
    assert!(bodies[0]["query"].as_str().unwrap().contains("providerKey: \"local\""));
}

#[tokio::test]
async fn test_graphql_errors_carry_message_and_variables() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{"message": "Email is invalid"}, {"message": "second"}]
        })))
        .mount(&ctx.server)
        .await;

    match create_user(&ctx.client, &request_fixture("Alice")).await {
        Err(ApiError::GraphQl { message, variables }) => {
            assert_eq!(message, "Email is invalid");
            assert_eq!(variables.unwrap()["email"], "alice@example.com");
        }
        other => panic!("Expected GraphQl error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_rejected_creation() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_rejected("User already exists")))
        .mount(&ctx.server)
        .await;

    match create_user(&ctx.client, &request_fixture("Alice")).await {
        Err(ApiError::Rejected { message, .. }) => assert_eq!(message, "User already exists"),
        other => panic!("Expected Rejected error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_http_error_status() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&ctx.server)
        .await;

    match list_groups(&ctx.client).await {
        Err(ApiError::Status { status, body }) => {
            assert_eq!(status, 401);
            assert_eq!(body, "Unauthorized");
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unexpected_shape_is_decode_error() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"users": {"list": [{"id": "not-a-number"}]}}
        })))
        .mount(&ctx.server)
        .await;

    assert!(matches!(list_users(&ctx.client).await, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn test_missing_data_is_decode_error() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&ctx.server)
        .await;

    assert!(matches!(list_groups(&ctx.client).await, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&ctx.server)
        .await;

    assert!(matches!(list_users(&ctx.client).await, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn test_connection_refused_is_request_error() {
    wikijs_admin::api::set_silent(true);
    // Nothing listens on port 9 locally.
    let client = GraphQlClient::new(Config::new("http://127.0.0.1:9/graphql", "t")).unwrap();
    assert!(matches!(list_users(&client).await, Err(ApiError::Request(_))));
}
