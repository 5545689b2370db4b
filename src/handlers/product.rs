//! Product CRUD handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::extractors::{JsonBody, ProductId};
use crate::models::{Product, ProductCreate, ProductUpdate};
use crate::response::{self, ErrorBody, MessageBody};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "products",
    request_body = ProductCreate,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Malformed or invalid input", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ProductCreate>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::validate(&input)?;
    let mut product = input.into_product();
    state.products.create(&mut product).await?;
    tracing::info!(id = product.id, "product created");
    Ok(response::created(product))
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "products",
    responses(
        (status = 200, description = "All live products", body = [Product]),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = state.products.get_all().await?;
    Ok(response::ok(products))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, description = "Invalid product ID", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody)
    )
)]
pub async fn read(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<impl IntoResponse, AppError> {
    let product = state.products.get_by_id(id).await?;
    Ok(response::ok(product))
}

#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    request_body = ProductUpdate,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Invalid id or input", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    JsonBody(input): JsonBody<ProductUpdate>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::validate(&input)?;
    let mut product = state.products.get_by_id(id).await?;
    input.apply_to(&mut product);
    state.products.update(&mut product).await?;
    tracing::info!(id, "product updated");
    Ok(response::ok(product))
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = MessageBody),
        (status = 400, description = "Invalid product ID", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<impl IntoResponse, AppError> {
    state.products.delete(id).await?;
    tracing::info!(id, "product deleted");
    Ok(response::deleted())
}
