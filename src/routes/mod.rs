//! Router assembly: common probes, API docs, and the versioned product routes.

mod common;
mod docs;
mod product;

pub use common::{common_routes, common_routes_with_ready};
pub use docs::docs_routes;
pub use product::product_routes;

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub const API_PREFIX: &str = "/api/v1";

async fn no_route() -> AppError {
    AppError::NoRoute
}

/// Give the router's bare 405 the JSON error body, keeping its `Allow` header.
async fn json_method_not_allowed(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED || response.headers().contains_key(header::CONTENT_TYPE) {
        return response;
    }
    let allow = response.headers().get(header::ALLOW).cloned();
    let mut json = AppError::MethodNotAllowed.into_response();
    if let Some(allow) = allow {
        json.headers_mut().insert(header::ALLOW, allow);
    }
    json
}

/// Full application router. Bodies over `body_limit` bytes are rejected by the
/// JSON extractor, so the 413 carries the usual error body.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(docs_routes())
        .nest(API_PREFIX, product_routes(state))
        .fallback(no_route)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::map_response(json_method_not_allowed))
                .layer(DefaultBodyLimit::max(body_limit)),
        )
}
