/**
 * Authentication Middleware
 *
 * Middleware protecting routes that require a session. It reads the
 * session token from the request's cookie, verifies it, and attaches
 * the decoded identity to the request before the handler runs.
 *
 * Applied as a route layer, so a rejected request is answered before
 * any handler or store work happens.
 */

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::backend::auth::handlers::TOKEN_COOKIE;
use crate::backend::auth::sessions::{verify_token, Claims};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Identity decoded from the session cookie
///
/// Inserted into request extensions by the middleware; downstream
/// handlers can read it when they need the caller's identity.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub claims: Claims,
}

/// Authentication middleware
///
/// 1. Reads the `token` cookie
/// 2. Verifies the token against the configured secret
/// 3. Attaches the decoded identity to request extensions
///
/// Returns 401 with the fixed unauthorized body if the cookie is
/// missing or the token is invalid or expired.
pub async fn auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = jar
        .get(TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| {
            tracing::warn!("missing session cookie");
            BackendError::Unauthorized
        })?;

    let claims = verify_token(&token, &state.config.token_secret).map_err(|err| {
        tracing::warn!("session token rejected: {err}");
        BackendError::Unauthorized
    })?;

    request.extensions_mut().insert(AuthenticatedUser { claims });

    Ok(next.run(request).await)
}
