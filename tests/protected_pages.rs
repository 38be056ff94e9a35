//! Page and middleware integration tests
//!
//! These tests run without a database: the pages and the token
//! middleware never touch the store, and the store-backed endpoints
//! report the store as unavailable.

mod common;

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;

use common::auth_helpers::generate_test_token;
use common::test_server;

#[tokio::test]
async fn test_landing_page() {
    let server = test_server(None).await;

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Ultra Startup Platform"));
}

#[tokio::test]
async fn test_login_page() {
    let server = test_server(None).await;

    let response = server.get("/login").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("/api/login"));
}

#[tokio::test]
async fn test_dashboard_without_token() {
    let server = test_server(None).await;

    let response = server.get("/dashboard").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<String>(), "Sem token");
}

#[tokio::test]
async fn test_dashboard_with_garbage_token() {
    let server = test_server(None).await;

    let response = server
        .get("/dashboard")
        .add_header(AUTHORIZATION, HeaderValue::from_static("garbage"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<String>(), "Token inválido");
}

#[tokio::test]
async fn test_dashboard_with_valid_token() {
    let server = test_server(None).await;
    let token = generate_test_token(uuid::Uuid::new_v4());

    // The token goes in the header raw, with no scheme prefix.
    let response = server
        .get("/dashboard")
        .add_header(AUTHORIZATION, HeaderValue::from_str(&token).unwrap())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Bem-vindo ao Dashboard"));
}

#[tokio::test]
async fn test_dashboard_rejects_bearer_prefixed_token() {
    let server = test_server(None).await;
    let token = generate_test_token(uuid::Uuid::new_v4());

    // A "Bearer " prefix makes the header value unverifiable, the same
    // as any other malformed token.
    let prefixed = format!("Bearer {}", token);
    let response = server
        .get("/dashboard")
        .add_header(AUTHORIZATION, HeaderValue::from_str(&prefixed).unwrap())
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<String>(), "Token inválido");
}

#[tokio::test]
async fn test_dashboard_with_token_signed_by_other_secret() {
    let server = test_server(None).await;

    let other_keys = ultra_platform::auth::sessions::SessionKeys::new("some-other-secret");
    let token = other_keys.issue(uuid::Uuid::new_v4()).unwrap();

    let response = server
        .get("/dashboard")
        .add_header(AUTHORIZATION, HeaderValue::from_str(&token).unwrap())
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_without_database() {
    let server = test_server(None).await;

    let response = server
        .post("/api/register")
        .json(&serde_json::json!({
            "name": "A",
            "email": "a@x.com",
            "password": "pw"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_checkout_without_stripe() {
    let server = test_server(None).await;

    let response = server.post("/api/checkout").await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let server = test_server(None).await;

    let response = server.get("/does-not-exist").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
