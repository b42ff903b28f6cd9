use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use super::CredentialsRequest;
use crate::error::ApiResult;
use crate::handlers::utils::json_body;
use crate::state::AppState;

/// POST /register - Create an account
///
/// Input: `{ "username": "string", "password": "string" }`
///
/// 201 `{ "message": "User created successfully" }`; 400 when a field is
/// missing or empty, or when the username is taken.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let (username, password) = json_body(payload)?.into_parts();

    state.credentials().register(&username, &password).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User created successfully" })),
    ))
}
