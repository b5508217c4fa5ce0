/**
 * User Store Operations
 *
 * User records are schemaless documents in the `userDB` collection:
 * whatever profile object the client registered, plus an optional
 * `role` field. A record whose `role` is `"Admin"` is an administrator;
 * absence of the field means a regular user.
 */

use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, Document},
    results::{DeleteResult, UpdateResult},
};

use crate::backend::error::BackendError;
use crate::backend::store::Store;

/// The role value marking an administrator
pub const ADMIN_ROLE: &str = "Admin";

/// List all user records
pub async fn list_users(store: &Store) -> Result<Vec<Document>, BackendError> {
    let cursor = store.users().find(doc! {}).await?;
    Ok(cursor.try_collect().await?)
}

/// Insert a user record, returning the store-assigned id
pub async fn insert_user(store: &Store, user: Document) -> Result<Bson, BackendError> {
    let result = store.users().insert_one(user).await?;
    Ok(result.inserted_id)
}

/// Set `role = "Admin"` on one user
///
/// Idempotent: promoting an admin again matches the record without
/// modifying it.
pub async fn promote_user(store: &Store, id: ObjectId) -> Result<UpdateResult, BackendError> {
    let update = doc! { "$set": { "role": ADMIN_ROLE } };
    Ok(store.users().update_one(doc! { "_id": id }, update).await?)
}

/// Delete one user by id
pub async fn delete_user(store: &Store, id: ObjectId) -> Result<DeleteResult, BackendError> {
    Ok(store.users().delete_one(doc! { "_id": id }).await?)
}
