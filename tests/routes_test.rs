//! Route surface integration tests
//!
//! Covers the health route, session issuance and cookie attributes,
//! input validation rejections, and the 404/405 surface.

mod common;

use axum::http::StatusCode;
use axum_extra::extract::cookie::SameSite;
use axum_test::TestServer;
use serde_json::{json, Value};

use common::{test_server, TEST_SECRET};
use portfolio_api::backend::auth::sessions::{verify_token, TOKEN_TTL_SECS};

async fn cors_probe(server: &TestServer) -> axum_test::TestResponse {
    server
        .get("/")
        .add_header(
            axum::http::header::ORIGIN,
            axum::http::HeaderValue::from_static("http://localhost:5173"),
        )
        .await
}

#[tokio::test]
async fn test_health() {
    let server = test_server().await;

    let response = server.get("/").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "Portfolio server is running");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let server = test_server().await;
    server
        .get("/definitely-not-a-route")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_is_405() {
    let server = test_server().await;
    server
        .delete("/jwt")
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_jwt_sets_session_cookie() {
    let server = test_server().await;

    let response = server
        .post("/jwt")
        .json(&json!({ "email": "owner@example.com", "name": "Owner" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({ "success": true }));

    let cookie = response.cookie("token");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.path(), Some("/"));
    // test config runs without TLS
    assert_ne!(cookie.secure(), Some(true));

    // The cookie value is a verifiable token carrying the submitted
    // identity and a one-hour expiry.
    let claims = verify_token(cookie.value(), TEST_SECRET).expect("cookie token must verify");
    assert_eq!(claims.identity.get("email"), Some(&json!("owner@example.com")));
    assert_eq!(claims.exp, claims.iat + TOKEN_TTL_SECS);
}

#[tokio::test]
async fn test_send_rejects_invalid_email() {
    let server = test_server().await;

    let response = server
        .post("/send")
        .json(&json!({ "name": "A", "email": "not-an-email", "message": "hi" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "invalid email format");
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_send_rejects_blank_fields() {
    let server = test_server().await;

    let response = server
        .post("/send")
        .json(&json!({ "name": "  ", "email": "a@x.com", "message": "hi" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/send")
        .json(&json!({ "name": "A", "email": "a@x.com", "message": "" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_rejects_non_object_body() {
    let server = test_server().await;

    let response = server.post("/users").json(&json!(["not", "an", "object"])).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "user must be a JSON object");
}

#[tokio::test]
async fn test_jwt_rejects_non_object_body() {
    let server = test_server().await;

    let response = server.post("/jwt").json(&json!("just a string")).await;
    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_cors_allows_the_configured_origin() {
    let server = test_server().await;

    let response = cors_probe(&server).await;
    response.assert_status_ok();

    assert_eq!(
        response.header("access-control-allow-origin"),
        "http://localhost:5173"
    );
    assert_eq!(response.header("access-control-allow-credentials"), "true");
}
