//! Common test utilities
//!
//! Builds an in-process test server over the real application. The
//! store config points at an unreachable address with a short server
//! selection timeout: gate rejections never touch the store, and
//! requests that do pass the gate surface a fast store error instead
//! of hanging.

// not every test binary uses every helper
#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{json, Map, Value};

use portfolio_api::backend::auth::sessions::issue_token;
use portfolio_api::backend::server::config::{AppConfig, SmtpConfig};
use portfolio_api::backend::server::init::create_app;

/// Signing secret shared by the test server and the token helpers
pub const TEST_SECRET: &str = "test-access-token-secret";

pub fn test_config() -> AppConfig {
    AppConfig {
        port: 0,
        mongodb_uri:
            "mongodb://127.0.0.1:9/?serverSelectionTimeoutMS=200&connectTimeoutMS=200".to_string(),
        database_name: "portfolioTestDB".to_string(),
        token_secret: TEST_SECRET.to_string(),
        cors_origin: "http://localhost:5173".to_string(),
        cookie_secure: false,
        smtp: SmtpConfig {
            host: "localhost".to_string(),
            username: "portfolio@example.com".to_string(),
            password: "unused".to_string(),
            recipient: "owner@example.com".to_string(),
        },
    }
}

pub async fn test_server() -> TestServer {
    let app = create_app(test_config())
        .await
        .expect("failed to build test app");
    TestServer::new(app).expect("failed to start test server")
}

pub fn test_identity() -> Map<String, Value> {
    let mut identity = Map::new();
    identity.insert("email".to_string(), json!("owner@example.com"));
    identity
}

/// Issue a token the test server will accept
pub fn valid_token() -> String {
    issue_token(test_identity(), TEST_SECRET).expect("failed to issue test token")
}

/// Issue a well-signed token that expired an hour ago
pub fn expired_token() -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = json!({
        "email": "owner@example.com",
        "iat": now - 7200,
        "exp": now - 3600,
    });
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("failed to encode expired token")
}

/// Issue a token signed with the wrong secret
pub fn tampered_token() -> String {
    issue_token(test_identity(), "some-other-secret").expect("failed to issue token")
}
