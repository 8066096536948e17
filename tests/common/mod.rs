use axum::{
    body::{self, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use product_inventory::{app, AppState, Config, SqliteStore};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub async fn read_body(body: Body) -> Value {
    let bytes = body::to_bytes(body, usize::MAX).await.expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("response was not valid json")
}

/// Router over a fresh in-memory store. The store handle is returned for direct inspection.
pub async fn create_app() -> (Router, Arc<SqliteStore>) {
    let store = Arc::new(SqliteStore::in_memory().await.expect("Failed to open in-memory store"));
    let router = app(AppState::new(store.clone()), &Config::default());
    (router, store)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    (parts.status, read_body(body).await)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}
