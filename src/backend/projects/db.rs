/**
 * Project Link Model and Store Operations
 *
 * A project link is one portfolio card: the project's name, imagery,
 * links, and descriptive fields. Records live in the
 * `portfolioWebLinks` collection with a store-assigned id.
 */

use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, to_document, Bson, Document},
    results::{DeleteResult, UpdateResult},
};
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;
use crate::backend::store::Store;

/// One portfolio project card
///
/// `id` is absent on insert input and store-assigned. Edits overwrite
/// every field except the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLink {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub image: String,
    pub project_link: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_link: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub features: Vec<String>,
    pub tags: Vec<String>,
}

impl ProjectLink {
    /// Structural validation before any store write
    pub fn validate(&self) -> Result<(), BackendError> {
        if self.name.trim().is_empty() {
            return Err(BackendError::validation("name must not be empty"));
        }
        if self.image.trim().is_empty() {
            return Err(BackendError::validation("image must not be empty"));
        }
        if self.project_link.trim().is_empty() {
            return Err(BackendError::validation("projectLink must not be empty"));
        }
        Ok(())
    }

    /// Build the overwrite document for an edit
    ///
    /// Contains exactly the project fields; the id is stripped so it can
    /// never change through an edit.
    pub fn overwrite_fields(&self) -> Result<Document, BackendError> {
        let mut fields = to_document(self)?;
        fields.remove("_id");
        Ok(fields)
    }
}

/// List all project links
pub async fn list_project_links(store: &Store) -> Result<Vec<ProjectLink>, BackendError> {
    let cursor = store.project_links().find(doc! {}).await?;
    Ok(cursor.try_collect().await?)
}

/// Fetch one project link by id
pub async fn get_project_link(
    store: &Store,
    id: ObjectId,
) -> Result<Option<ProjectLink>, BackendError> {
    Ok(store.project_links().find_one(doc! { "_id": id }).await?)
}

/// Insert a project link, returning the store-assigned id
pub async fn insert_project_link(
    store: &Store,
    project: &ProjectLink,
) -> Result<Bson, BackendError> {
    let result = store.project_links().insert_one(project).await?;
    Ok(result.inserted_id)
}

/// Overwrite the fields of one project link
pub async fn update_project_link(
    store: &Store,
    id: ObjectId,
    project: &ProjectLink,
) -> Result<UpdateResult, BackendError> {
    let update = doc! { "$set": project.overwrite_fields()? };
    Ok(store
        .project_links()
        .update_one(doc! { "_id": id }, update)
        .await?)
}

/// Delete one project link by id
///
/// Deleting a missing id is not an error; the result carries a zero
/// deleted count.
pub async fn delete_project_link(store: &Store, id: ObjectId) -> Result<DeleteResult, BackendError> {
    Ok(store.project_links().delete_one(doc! { "_id": id }).await?)
}
