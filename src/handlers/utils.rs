use axum::extract::{rejection::JsonRejection, Json};

use crate::error::ApiError;

/// Unwrap a JSON body, reporting malformed or missing bodies as 400 INVALID_JSON
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::debug!("Rejected request body: {}", rejection.body_text());
            Err(ApiError::invalid_json(rejection.body_text()))
        }
    }
}
