use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::extract_bearer_token;
use crate::error::ApiError;
use crate::state::AppState;

/// JWT authentication middleware that validates the bearer token and
/// injects the caller's `Identity` into request extensions
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(request.headers()).map_err(ApiError::unauthorized)?;
    let identity = state.tokens.verify(token)?;

    tracing::debug!("Authenticated request as '{}' ({})", identity.username, identity.id);
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}
