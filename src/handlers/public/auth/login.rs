use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;

use super::CredentialsRequest;
use crate::auth::AuthError;
use crate::error::ApiResult;
use crate::handlers::utils::json_body;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// POST /login - Exchange credentials for a bearer token
///
/// Input: `{ "username": "string", "password": "string" }`
///
/// 200 `{ "access_token": "..." }`; 400 on missing fields, 401 on bad credentials.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let (username, password) = json_body(payload)?.into_parts();

    let user = match state.credentials().verify(&username, &password).await {
        Ok(user) => user,
        Err(AuthError::AuthFailure) => {
            tracing::warn!("Failed login attempt for '{}'", username);
            return Err(AuthError::AuthFailure.into());
        }
        Err(e) => return Err(e.into()),
    };

    let access_token = state.tokens.issue(user.id, &user.username)?;
    tracing::info!("User '{}' logged in", user.username);

    Ok(Json(LoginResponse { access_token }))
}
