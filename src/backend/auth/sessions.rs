/**
 * Session Tokens
 *
 * This module handles session token issuance and verification. Tokens
 * are HMAC-signed JWTs over whatever identity object the caller
 * submitted, with a fixed one-hour expiry. There is no refresh
 * mechanism and no server-side session state; expiry forces clients to
 * request a new token.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Token lifetime in seconds
pub const TOKEN_TTL_SECS: i64 = 60 * 60;

/// Session token claims
///
/// The identity object is caller-supplied and deliberately unvalidated;
/// it is carried through verification untouched and attached to gated
/// requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Caller-supplied identity fields
    #[serde(flatten)]
    pub identity: Map<String, Value>,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Issue a session token for an identity object
///
/// # Arguments
/// * `identity` - arbitrary identity fields to embed in the token
/// * `secret` - server-held signing secret
///
/// # Returns
/// Signed token string, valid for one hour
pub fn issue_token(
    identity: Map<String, Value>,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        identity,
        iat: now,
        exp: now + TOKEN_TTL_SECS,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify and decode a session token
///
/// Fails when the signature does not match the secret or the token has
/// expired; otherwise returns the decoded claims.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}
