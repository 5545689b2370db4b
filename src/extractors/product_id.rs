//! Extract and parse the `{id}` path segment.

use crate::error::AppError;
use crate::service::{RequestValidator, INVALID_PRODUCT_ID};
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Product id from the path. Runs before the body is read, so a bad id is reported
/// ahead of any body error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest(INVALID_PRODUCT_ID.into()))?;
        RequestValidator::parse_id(&raw).map(ProductId)
    }
}
