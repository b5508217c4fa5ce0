/**
 * Backend Error Types
 *
 * This module defines the error type used across the backend server.
 * Every handler returns `BackendError` on failure, and the conversion
 * module turns it into an HTTP response.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Backend-specific error type
///
/// # Error Categories
///
/// - `Unauthorized` - missing, invalid, or expired session token on a
///   gated route; always rendered with the fixed 401 body
/// - `Validation` - request input failed a structural check before any
///   store operation ran
/// - `Database` - a store operation failed
/// - `Token` - session token issuance failed
/// - `Email` - the notification email could not be built or sent
/// - `Config` - startup configuration is missing or malformed
#[derive(Debug, Error)]
pub enum BackendError {
    /// Missing, invalid, or expired session token on a gated route
    #[error("Unauthorized Access")]
    Unauthorized,

    /// Request input failed structural validation
    #[error("{0}")]
    Validation(String),

    /// Store operation failure
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Session token issuance failure
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Notification email failure
    #[error("email error: {0}")]
    Email(String),

    /// Startup configuration failure
    #[error("configuration error: {0}")]
    Config(String),
}

impl BackendError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Token(_) | Self::Email(_) | Self::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_status() {
        assert_eq!(
            BackendError::Unauthorized.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_validation_status() {
        let err = BackendError::validation("name must not be empty");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "name must not be empty");
    }

    #[test]
    fn test_internal_errors_map_to_500() {
        let err = BackendError::Email("connection refused".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = BackendError::config("ACCESS_TOKEN_SECRET must be set");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
