//! Request validation for product input shapes.

use crate::error::AppError;
use crate::models::ProductInput;

pub const NAME_REQUIRED: &str = "Name is required";
pub const PRICE_NOT_POSITIVE: &str = "Price must be greater than 0";
pub const QUANTITY_NEGATIVE: &str = "Quantity cannot be negative";
pub const INVALID_PRODUCT_ID: &str = "Invalid product ID";

pub struct RequestValidator;

impl RequestValidator {
    /// Checks run in order name, price, quantity; the first failure is returned.
    pub fn validate<T: ProductInput>(input: &T) -> Result<(), AppError> {
        if input.name().is_empty() {
            return Err(AppError::Validation(NAME_REQUIRED.into()));
        }
        let price = input.price();
        if price.is_nan() || price <= 0.0 {
            return Err(AppError::Validation(PRICE_NOT_POSITIVE.into()));
        }
        if input.quantity() < 0 {
            return Err(AppError::Validation(QUANTITY_NEGATIVE.into()));
        }
        Ok(())
    }

    /// Path ids must be non-negative integers.
    pub fn parse_id(raw: &str) -> Result<i64, AppError> {
        raw.parse::<i64>()
            .ok()
            .filter(|id| *id >= 0)
            .ok_or_else(|| AppError::BadRequest(INVALID_PRODUCT_ID.into()))
    }
}
