/**
 * Session Issuance Handler
 *
 * Implements POST /jwt. The submitted identity object is signed into a
 * one-hour session token and set as an http-only cookie; the body only
 * acknowledges success. Clients re-submit to this endpoint when the
 * token expires.
 */

use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde_json::{json, Map, Value};

use crate::backend::auth::sessions::issue_token;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Name of the session cookie
pub const TOKEN_COOKIE: &str = "token";

/// Issue a session token and set it as a cookie
///
/// # Errors
///
/// * `500 Internal Server Error` - if token signing fails
pub async fn issue_session(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(identity): Json<Map<String, Value>>,
) -> Result<(CookieJar, Json<Value>), BackendError> {
    let token = issue_token(identity, &state.config.token_secret)?;

    // Secure is configuration-driven; local development runs without TLS
    let cookie = Cookie::build((TOKEN_COOKIE, token))
        .http_only(true)
        .secure(state.config.cookie_secure)
        .same_site(SameSite::Lax)
        .path("/")
        .build();

    tracing::debug!("issued session token");

    Ok((jar.add(cookie), Json(json!({ "success": true }))))
}
