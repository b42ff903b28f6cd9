use axum::{
    extract::{rejection::JsonRejection, Extension, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::Identity;
use crate::database::models::MAX_CONTENT_LENGTH;
use crate::database::TodoItem;
use crate::error::{ApiError, ApiResult};
use crate::handlers::utils::json_body;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TodoListResponse {
    pub items: Vec<TodoItem>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub content: Option<String>,
}

/// GET /todo - All of the caller's items, oldest first
pub async fn list(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> ApiResult<Json<TodoListResponse>> {
    let items = state.store.list_items(identity.id).await?;
    Ok(Json(TodoListResponse { items }))
}

/// POST /todo - Create an item for the caller
///
/// Input: `{ "content": "string" }`. Content is stored as given; blank or
/// over-long content is rejected with 400.
pub async fn create(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> ApiResult<Json<TodoItem>> {
    let content = json_body(payload)?.content.unwrap_or_default();
    validate_content(&content)?;

    let item = state.store.insert_item(identity.id, &content).await?;
    tracing::debug!("User {} created todo item {}", identity.id, item.id);

    Ok(Json(item))
}

fn validate_content(content: &str) -> Result<(), ApiError> {
    if content.trim().is_empty() {
        return Err(ApiError::bad_request("Missing content"));
    }
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(ApiError::bad_request(format!(
            "Content must be at most {} characters",
            MAX_CONTENT_LENGTH
        )));
    }
    Ok(())
}
