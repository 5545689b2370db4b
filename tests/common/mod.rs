// tests/common/mod.rs
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use product_api::{app, connect_in_memory, ensure_products_table, AppState, DEFAULT_BODY_LIMIT};
use serde_json::Value;
use tower::ServiceExt;

/// Router over a fresh in-memory SQLite database.
pub async fn sqlite_app() -> Router {
    let pool = connect_in_memory().await.expect("open in-memory sqlite");
    ensure_products_table(&pool).await.expect("create products table");
    app(AppState::sqlite(pool), DEFAULT_BODY_LIMIT)
}

/// Router over the process-local repository.
pub fn memory_app() -> Router {
    app(AppState::in_memory(), DEFAULT_BODY_LIMIT)
}

/// Send one request and decode the JSON response body (`Value::Null` when empty).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("build request");
    send_request(app, request).await
}

/// Send a raw body with a JSON content type.
pub async fn send_raw(app: &Router, method: Method, uri: &str, raw: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(raw.to_string()))
        .expect("build request");
    send_request(app, request).await
}

async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response is JSON")
    };
    (status, json)
}

pub fn error_message(body: &Value) -> &str {
    body["error"].as_str().expect("error body")
}
