// tests/service_routes.rs
mod common;
use axum::http::{Method, StatusCode};
use common::*;
use product_api::{connect, connect_in_memory, ensure_products_table, AppState, Settings, DEFAULT_BODY_LIMIT};
use serde_json::json;

#[tokio::test]
async fn health_and_version_respond() {
    let app = memory_app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, body) = send(&app, Method::GET, "/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "product-api");
}

#[tokio::test]
async fn ready_reports_store_state() {
    let app = sqlite_app().await;
    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["store"], "ok");
}

#[tokio::test]
async fn ready_is_unavailable_once_the_pool_is_closed() {
    let pool = connect_in_memory().await.unwrap();
    ensure_products_table(&pool).await.unwrap();
    let app = product_api::app(AppState::sqlite(pool.clone()), DEFAULT_BODY_LIMIT);
    pool.close().await;

    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({"status": "degraded", "store": "unavailable"}));

    let (status, _) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn store_failure_returns_generic_500() {
    // No products table: every query fails inside SQLite.
    let pool = connect_in_memory().await.unwrap();
    let app = product_api::app(AppState::sqlite(pool), DEFAULT_BODY_LIMIT);

    let (status, body) = send(&app, Method::GET, "/api/v1/products", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal server error"}));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/products",
        Some(json!({"name": "Widget", "price": 1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal server error"}));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = memory_app();
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/products"].is_object());
    assert!(body["paths"]["/api/v1/products/{id}"]["put"].is_object());
    assert!(body["components"]["schemas"]["Product"].is_object());

    let (status, _) = send(&app, Method::GET, "/", None).await;
    assert!(status.is_redirection());
}

#[tokio::test]
async fn file_database_is_created_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("products.db");
    let settings = Settings::from_lookup(|key| match key {
        "DATABASE_PATH" => Some(path.display().to_string()),
        _ => None,
    })
    .unwrap();

    let pool = connect(&settings).await.unwrap();
    ensure_products_table(&pool).await.unwrap();
    assert!(path.exists());

    let app = product_api::app(AppState::sqlite(pool.clone()), DEFAULT_BODY_LIMIT);
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/products",
        Some(json!({"name": "Durable", "price": 3.0})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    pool.close().await;

    let pool = connect(&settings).await.unwrap();
    ensure_products_table(&pool).await.unwrap();
    let app = product_api::app(AppState::sqlite(pool), DEFAULT_BODY_LIMIT);
    let (status, body) = send(&app, Method::GET, "/api/v1/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Durable");
}

#[tokio::test]
async fn rows_from_an_older_schema_are_readable() {
    let pool = connect_in_memory().await.unwrap();
    sqlx::query(
        "CREATE TABLE products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT,
            price REAL NOT NULL,
            quantity INTEGER DEFAULT 0,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            sku TEXT
        )",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query("INSERT INTO products (name, price) VALUES ('Legacy', 4.5)")
        .execute(&pool)
        .await
        .unwrap();
    ensure_products_table(&pool).await.unwrap();

    let app = product_api::app(AppState::sqlite(pool), DEFAULT_BODY_LIMIT);
    let (status, body) = send(&app, Method::GET, "/api/v1/products/1", None).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["name"], "Legacy");
    assert_eq!(body["description"], "");
    assert_eq!(body["sku"], "");
    assert_eq!(body["barcode"], "");
    assert!(body["created_at"].is_string());

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/products/1",
        Some(json!({"name": "Legacy", "price": 5.0, "barcode": "42"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["barcode"], "42");
}
