//! Integration tests for listing and deactivating owned URLs.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};

use common::{register_user, test_server};

async fn shorten(server: &TestServer, token: &str, url: &str) -> Value {
    let response = server
        .post("/api/shorten")
        .authorization_bearer(token)
        .json(&json!({ "originalUrl": url }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

async fn list(server: &TestServer, token: &str) -> Vec<Value> {
    let response = server.get("/api/urls").authorization_bearer(token).await;
    response.assert_status(StatusCode::OK);
    response.json()
}

#[tokio::test]
async fn test_list_is_empty_for_new_user() {
    let server = test_server();
    let token = register_user(&server, "alice@example.com", "s3cret").await;

    assert!(list(&server, &token).await.is_empty());
}

#[tokio::test]
async fn test_list_returns_newest_first() {
    let server = test_server();
    let token = register_user(&server, "alice@example.com", "s3cret").await;

    shorten(&server, &token, "https://example.com/first").await;
    shorten(&server, &token, "https://example.com/second").await;
    shorten(&server, &token, "https://example.com/third").await;

    let urls = list(&server, &token).await;
    assert_eq!(urls.len(), 3);
    assert_eq!(urls[0]["originalUrl"], "https://example.com/third");
    assert_eq!(urls[1]["originalUrl"], "https://example.com/second");
    assert_eq!(urls[2]["originalUrl"], "https://example.com/first");
    assert!(urls[0]["active"].as_bool().unwrap());
}

#[tokio::test]
async fn test_list_is_scoped_to_the_caller() {
    let server = test_server();
    let alice = register_user(&server, "alice@example.com", "s3cret").await;
    let bob = register_user(&server, "bob@example.com", "s3cret").await;

    shorten(&server, &alice, "https://example.com/alice").await;
    shorten(&server, &bob, "https://example.com/bob").await;

    let urls = list(&server, &alice).await;
    assert_eq!(urls.len(), 1);
    assert_eq!(urls[0]["originalUrl"], "https://example.com/alice");
}

#[tokio::test]
async fn test_list_requires_bearer_token() {
    let server = test_server();
    let response = server.get("/api/urls").await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_deactivate_returns_204_and_flags_record() {
    let server = test_server();
    let token = register_user(&server, "alice@example.com", "s3cret").await;

    shorten(&server, &token, "https://example.com").await;
    let id = list(&server, &token).await[0]["id"].as_i64().unwrap();

    let response = server
        .delete(&format!("/api/urls/{id}"))
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::NO_CONTENT);

    let urls = list(&server, &token).await;
    assert!(!urls[0]["active"].as_bool().unwrap());
}

#[tokio::test]
async fn test_deactivate_is_idempotent() {
    let server = test_server();
    let token = register_user(&server, "alice@example.com", "s3cret").await;

    shorten(&server, &token, "https://example.com").await;
    let id = list(&server, &token).await[0]["id"].as_i64().unwrap();

    for _ in 0..2 {
        let response = server
            .delete(&format!("/api/urls/{id}"))
            .authorization_bearer(&token)
            .await;
        response.assert_status(StatusCode::NO_CONTENT);
    }
}

#[tokio::test]
async fn test_deactivate_foreign_url_returns_403() {
    let server = test_server();
    let alice = register_user(&server, "alice@example.com", "s3cret").await;
    let bob = register_user(&server, "bob@example.com", "s3cret").await;

    shorten(&server, &alice, "https://example.com").await;
    let id = list(&server, &alice).await[0]["id"].as_i64().unwrap();

    let response = server
        .delete(&format!("/api/urls/{id}"))
        .authorization_bearer(&bob)
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(
        body["error"]["message"],
        "You do not have permission to delete this URL"
    );

    // The record stays active.
    let urls = list(&server, &alice).await;
    assert!(urls[0]["active"].as_bool().unwrap());
}

#[tokio::test]
async fn test_deactivate_unknown_id_returns_404() {
    let server = test_server();
    let token = register_user(&server, "alice@example.com", "s3cret").await;

    let response = server
        .delete("/api/urls/9999")
        .authorization_bearer(&token)
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}
