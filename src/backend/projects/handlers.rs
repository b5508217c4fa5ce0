/**
 * Project Link HTTP Handlers
 *
 * One handler per route; each performs a single store operation and
 * forwards the raw result. Mutation responses carry the store's
 * acknowledgement counts.
 */

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::backend::error::BackendError;
use crate::backend::store::{parse_object_id, Store};

use super::db::{self, ProjectLink};

/// GET /projects-links - list all project links
pub async fn list_project_links(
    State(store): State<Store>,
) -> Result<Json<Vec<ProjectLink>>, BackendError> {
    let links = db::list_project_links(&store).await?;
    Ok(Json(links))
}

/// GET /super-shohag/edit/{id} - fetch one project link
///
/// A missing record answers with a JSON `null` body; the raw lookup
/// result is forwarded as-is.
pub async fn get_project_link(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<Option<ProjectLink>>, BackendError> {
    let id = parse_object_id(&id)?;
    let link = db::get_project_link(&store, id).await?;
    if link.is_none() {
        tracing::debug!(%id, "project link not found");
    }
    Ok(Json(link))
}

/// POST /super-shohag/add - insert a project link
pub async fn add_project_link(
    State(store): State<Store>,
    Json(project): Json<ProjectLink>,
) -> Result<Json<Value>, BackendError> {
    project.validate()?;
    let inserted_id = db::insert_project_link(&store, &project).await?;
    tracing::info!("inserted project link {:?}", inserted_id);
    Ok(Json(json!({ "insertedId": inserted_id })))
}

/// PATCH /super-shohag/edit/{id} - overwrite the fields of one project link
pub async fn edit_project_link(
    State(store): State<Store>,
    Path(id): Path<String>,
    Json(project): Json<ProjectLink>,
) -> Result<Json<Value>, BackendError> {
    let id = parse_object_id(&id)?;
    project.validate()?;
    let result = db::update_project_link(&store, id, &project).await?;
    Ok(Json(json!({
        "matchedCount": result.matched_count,
        "modifiedCount": result.modified_count,
    })))
}

/// DELETE /projects-links/{id} - delete one project link
pub async fn delete_project_link(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<Value>, BackendError> {
    let id = parse_object_id(&id)?;
    let result = db::delete_project_link(&store, id).await?;
    Ok(Json(json!({ "deletedCount": result.deleted_count })))
}
