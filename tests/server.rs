mod common;

use std::sync::Arc;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use todo_api::database::MemoryStore;

/// Serve the app on an ephemeral port and return its base URL
async fn spawn_server() -> Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);
    let app = todo_api::app(common::test_state_with(Arc::new(MemoryStore::new())));

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server");
    });

    Ok(base_url)
}

#[tokio::test]
async fn full_session_over_http() -> Result<()> {
    let base_url = spawn_server().await?;
    let client = reqwest::Client::new();
    let credentials = json!({ "username": "alice", "password": "secret" });

    let res = client
        .post(format!("{}/register", base_url))
        .json(&credentials)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/login", base_url))
        .json(&credentials)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let token = res.json::<Value>().await?["access_token"]
        .as_str()
        .expect("access_token")
        .to_string();

    let res = client
        .post(format!("{}/todo", base_url))
        .bearer_auth(&token)
        .json(&json!({ "content": "buy milk" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.json::<Value>().await?,
        json!({ "id": 1, "content": "buy milk", "done": false })
    );

    let res = client
        .put(format!("{}/todo/1", base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?["done"], true);

    let res = client
        .delete(format!("{}/todo/1", base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/todo", base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.json::<Value>().await?, json!({ "items": [] }));

    let res = client.get(format!("{}/todo", base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}
