//! Auth API tests.
//!
//! Covers the login endpoint and the bearer-token middleware around the
//! protected routes.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;

use common::fixtures;
use common::TestContext;

/// Test health check needs no token even when the gate is on.
#[tokio::test]
async fn test_health_check_is_open() {
    let ctx = TestContext::with_password("geheim");
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_text("OK");
}

/// Test login rejects a wrong password.
#[tokio::test]
async fn test_login_with_wrong_password() {
    let ctx = TestContext::with_password("geheim");
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/auth/login")
        .json(&fixtures::login_request("falsch"))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "unauthorized");
}

/// Test login yields a token that opens protected routes.
#[tokio::test]
async fn test_login_token_grants_access() {
    let ctx = TestContext::with_password("geheim");
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/auth/login")
        .json(&fixtures::login_request("geheim"))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let token = body["token"].as_str().unwrap();
    assert!(!token.is_empty());

    let response = server
        .get("/api/deck")
        .add_header(
            axum::http::header::AUTHORIZATION,
            TestContext::auth_header_value(token),
        )
        .await;
    response.assert_status_ok();
}

/// Test protected routes reject a missing Authorization header.
#[tokio::test]
async fn test_missing_header_is_unauthorized() {
    let ctx = TestContext::with_password("geheim");
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/deck").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

/// Test protected routes reject a non-Bearer header.
#[tokio::test]
async fn test_malformed_header_is_unauthorized() {
    let ctx = TestContext::with_password("geheim");
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .get("/api/deck")
        .add_header(axum::http::header::AUTHORIZATION, "Token abc123")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

/// Test protected routes reject a token the server never minted.
#[tokio::test]
async fn test_unknown_token_is_unauthorized() {
    let ctx = TestContext::with_password("geheim");
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .get("/api/deck")
        .add_header(
            axum::http::header::AUTHORIZATION,
            TestContext::auth_header_value("not-a-real-token"),
        )
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

/// Test an unset password leaves the whole API open.
#[tokio::test]
async fn test_disabled_gate_leaves_api_open() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/deck").await;

    response.assert_status_ok();
}
