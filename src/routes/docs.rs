//! OpenAPI JSON and a root redirect to it.

use crate::docs::ApiDoc;
use axum::{response::Redirect, routing::get, Json, Router};
use utoipa::OpenApi;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn root() -> Redirect {
    Redirect::permanent(OPENAPI_PATH)
}

pub fn docs_routes() -> Router {
    Router::new()
        .route("/", get(root))
        .route(OPENAPI_PATH, get(openapi))
}
