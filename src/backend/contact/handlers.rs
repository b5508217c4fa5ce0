/**
 * Contact HTTP Handlers
 *
 * POST /send persists the submission and then attempts the owner
 * notification email. Persistence is authoritative: a failed email
 * send is logged and reported in the response flag, it does not roll
 * back the stored message and it does not fail the request. There are
 * no retries.
 */

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::store::Store;

use super::db::{self, ContactMessage};

/// Contact form submission body
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl SendMessageRequest {
    /// Structural validation before any store write
    pub fn validate(&self) -> Result<(), BackendError> {
        if self.name.trim().is_empty() {
            return Err(BackendError::validation("name must not be empty"));
        }
        if self.message.trim().is_empty() {
            return Err(BackendError::validation("message must not be empty"));
        }
        if !self.email.contains('@') {
            return Err(BackendError::validation("invalid email format"));
        }
        Ok(())
    }
}

/// POST /send - persist a contact message and notify the owner
pub async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<Value>, BackendError> {
    request.validate()?;

    let message = ContactMessage::new(
        request.name.clone(),
        request.email.clone(),
        request.message.clone(),
    );
    db::insert_message(&state.store, &message).await?;

    let delivered = match state
        .mailer
        .send_contact_notification(&request.name, &request.email, &request.message)
        .await
    {
        Ok(()) => true,
        Err(err) => {
            tracing::error!("contact notification failed: {err}");
            false
        }
    };

    Ok(Json(json!({
        "message": "Message received",
        "emailDelivered": delivered,
    })))
}

/// GET /messages - list all contact messages
pub async fn list_messages(
    State(store): State<Store>,
) -> Result<Json<Vec<ContactMessage>>, BackendError> {
    let messages = db::list_messages(&store).await?;
    Ok(Json(messages))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, message: &str) -> SendMessageRequest {
        SendMessageRequest {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_submission() {
        assert!(request("A", "a@x.com", "hi").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        assert!(request("   ", "a@x.com", "hi").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_message() {
        assert!(request("A", "a@x.com", "").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_mail_without_at_sign() {
        assert!(request("A", "not-an-email", "hi").validate().is_err());
    }
}
