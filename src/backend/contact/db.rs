/**
 * Contact Message Model and Store Operations
 *
 * Messages submitted through the site's contact form. Records are
 * insert-only through this surface; `createdAt` is assigned by the
 * server at insertion time.
 */

use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson};
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;
use crate::backend::store::Store;

/// One contact form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Build a message record stamped with the current time
    pub fn new(name: String, email: String, message: String) -> Self {
        Self {
            id: None,
            name,
            email,
            message,
            created_at: Utc::now(),
        }
    }
}

/// Insert a contact message, returning the store-assigned id
pub async fn insert_message(store: &Store, message: &ContactMessage) -> Result<Bson, BackendError> {
    let result = store.messages().insert_one(message).await?;
    Ok(result.inserted_id)
}

/// List all contact messages
pub async fn list_messages(store: &Store) -> Result<Vec<ContactMessage>, BackendError> {
    let cursor = store.messages().find(doc! {}).await?;
    Ok(cursor.try_collect().await?)
}
