#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use todo_api::config::AppConfig;
use todo_api::database::{MemoryStore, Store};
use todo_api::state::AppState;

pub const TEST_SECRET: &str = "test-secret";

pub fn test_config() -> AppConfig {
    AppConfig::from_lookup(|key| match key {
        "JWT_SECRET_KEY" => Some(TEST_SECRET.to_string()),
        _ => None,
    })
    .expect("test configuration")
}

pub fn test_state_with(store: Arc<dyn Store>) -> AppState {
    AppState::new(test_config(), store)
}

/// Fresh application over an empty in-memory store
pub fn test_app() -> Router {
    todo_api::app(test_state_with(Arc::new(MemoryStore::new())))
}

/// Send one request through the router and decode the JSON body (Null if empty)
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).context("response body is not JSON")?
    };
    Ok((status, value))
}

pub async fn register(app: &Router, username: &str, password: &str) -> Result<(StatusCode, Value)> {
    send(
        app,
        "POST",
        "/register",
        None,
        Some(json!({ "username": username, "password": password })),
    )
    .await
}

pub async fn login(app: &Router, username: &str, password: &str) -> Result<(StatusCode, Value)> {
    send(
        app,
        "POST",
        "/login",
        None,
        Some(json!({ "username": username, "password": password })),
    )
    .await
}

/// Register and log in, returning the access token
pub async fn signup(app: &Router, username: &str, password: &str) -> Result<String> {
    let (status, body) = register(app, username, password).await?;
    anyhow::ensure!(status == StatusCode::CREATED, "register failed: {} {}", status, body);

    let (status, body) = login(app, username, password).await?;
    anyhow::ensure!(status == StatusCode::OK, "login failed: {} {}", status, body);

    body["access_token"]
        .as_str()
        .map(str::to_string)
        .context("login response has no access_token")
}
