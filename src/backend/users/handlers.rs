/**
 * User HTTP Handlers
 *
 * Registration is open: clients insert their own profile record on
 * first login. Listing, promotion, and deletion are gated behind the
 * auth middleware.
 */

use axum::{
    extract::{Path, State},
    Json,
};
use mongodb::bson::{to_document, Document};
use serde_json::{json, Value};

use crate::backend::error::BackendError;
use crate::backend::store::{parse_object_id, Store};

use super::db;

/// Structural check for a registration body
fn as_user_document(value: &Value) -> Result<Document, BackendError> {
    if !value.is_object() {
        return Err(BackendError::validation("user must be a JSON object"));
    }
    Ok(to_document(value)?)
}

/// GET /users - list all user records
pub async fn list_users(State(store): State<Store>) -> Result<Json<Vec<Document>>, BackendError> {
    let users = db::list_users(&store).await?;
    Ok(Json(users))
}

/// POST /users - insert a user record
pub async fn add_user(
    State(store): State<Store>,
    Json(user): Json<Value>,
) -> Result<Json<Value>, BackendError> {
    let user = as_user_document(&user)?;
    let inserted_id = db::insert_user(&store, user).await?;
    Ok(Json(json!({ "insertedId": inserted_id })))
}

/// PATCH /users/admin/{id} - promote one user to admin
pub async fn promote_user(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<Value>, BackendError> {
    let id = parse_object_id(&id)?;
    let result = db::promote_user(&store, id).await?;
    Ok(Json(json!({
        "matchedCount": result.matched_count,
        "modifiedCount": result.modified_count,
    })))
}

/// DELETE /users/{id} - delete one user
pub async fn delete_user(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<Value>, BackendError> {
    let id = parse_object_id(&id)?;
    let result = db::delete_user(&store, id).await?;
    Ok(Json(json!({ "deletedCount": result.deleted_count })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_document_accepts_arbitrary_objects() {
        let value = json!({
            "email": "visitor@example.com",
            "displayName": "Visitor",
            "links": { "github": "https://github.com/visitor" }
        });
        let doc = as_user_document(&value).unwrap();
        assert_eq!(doc.get_str("email").unwrap(), "visitor@example.com");
    }

    #[test]
    fn test_user_document_rejects_non_objects() {
        assert!(as_user_document(&json!("just a string")).is_err());
        assert!(as_user_document(&json!([1, 2, 3])).is_err());
        assert!(as_user_document(&json!(null)).is_err());
    }
}
