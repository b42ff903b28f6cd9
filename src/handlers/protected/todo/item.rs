use axum::{
    extract::{rejection::PathRejection, Extension, Path, State},
    Json,
};

use crate::auth::Identity;
use crate::database::{ItemId, TodoItem};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// PUT /todo/:id - Mark the caller's item as done
///
/// Completing an already-done item is a no-op that still returns the item.
/// Items that do not exist or belong to someone else are 404.
pub async fn complete(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    id: Result<Path<ItemId>, PathRejection>,
) -> ApiResult<Json<TodoItem>> {
    let id = item_id(id)?;
    let item = state.store.complete_item(identity.id, id).await?;
    tracing::debug!("User {} completed todo item {}", identity.id, item.id);
    Ok(Json(item))
}

/// DELETE /todo/:id - Remove the caller's item, returning its last state
pub async fn delete(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    id: Result<Path<ItemId>, PathRejection>,
) -> ApiResult<Json<TodoItem>> {
    let id = item_id(id)?;
    let item = state.store.delete_item(identity.id, id).await?;
    tracing::debug!("User {} deleted todo item {}", identity.id, item.id);
    Ok(Json(item))
}

fn item_id(path: Result<Path<ItemId>, PathRejection>) -> Result<ItemId, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|_| ApiError::bad_request("Todo item id must be an integer"))
}
