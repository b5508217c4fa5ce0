/**
 * Error Conversion
 *
 * Converts backend errors into HTTP responses so handlers can return
 * `BackendError` directly with `?`.
 *
 * # Response Format
 *
 * - `Unauthorized` renders the fixed body `{"message": "Unauthorized Access"}`
 * - other client errors render `{"error": <message>, "status": <code>}`
 * - server-side failures are logged and render a generic message; internal
 *   detail never reaches the client
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            BackendError::Unauthorized => {
                return (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "message": "Unauthorized Access" })),
                )
                    .into_response();
            }
            BackendError::Validation(message) => message.clone(),
            other => {
                tracing::error!("request failed: {other}");
                "Internal Server Error".to_string()
            }
        };

        (
            status,
            Json(json!({ "error": message, "status": status.as_u16() })),
        )
            .into_response()
    }
}

impl From<mongodb::bson::ser::Error> for BackendError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        Self::Database(err.into())
    }
}
