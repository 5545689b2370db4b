//! Typed errors and HTTP mapping.

use crate::response::ErrorBody;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

pub const MALFORMED_INPUT: &str = "Cannot parse JSON";
pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const INTERNAL_ERROR: &str = "Internal server error";
pub const BODY_TOO_LARGE: &str = "Request body too large";
pub const ROUTE_NOT_FOUND: &str = "Not found";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("malformed request body")]
    MalformedInput,
    #[error("request body exceeds the configured limit")]
    PayloadTooLarge,
    #[error("no route")]
    NoRoute,
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("product {0} not found")]
    NotFound(i64),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("internal: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedInput | AppError::Validation(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::NotFound(_) | AppError::NoRoute => StatusCode::NOT_FOUND,
            AppError::Db(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Db(_) | AppError::Io(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to return to the caller. Store and runtime details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::MalformedInput => MALFORMED_INPUT.to_string(),
            AppError::Validation(msg) | AppError::BadRequest(msg) => msg.clone(),
            AppError::PayloadTooLarge => BODY_TOO_LARGE.to_string(),
            AppError::NotFound(_) | AppError::Db(sqlx::Error::RowNotFound) => PRODUCT_NOT_FOUND.to_string(),
            AppError::NoRoute => ROUTE_NOT_FOUND.to_string(),
            AppError::MethodNotAllowed => METHOD_NOT_ALLOWED.to_string(),
            AppError::Db(_) | AppError::Io(_) | AppError::Internal(_) => {
                INTERNAL_ERROR.to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else if status == StatusCode::NOT_FOUND {
            tracing::warn!(error = %self, "not found");
        }
        let body = ErrorBody {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}
