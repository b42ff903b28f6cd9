use axum::Json;
use serde_json::{json, Value};

/// GET / - Greeting
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello, world!" }))
}
