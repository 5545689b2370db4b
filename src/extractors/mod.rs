//! Request extractors that reject with `AppError` so failures share the error body.

mod json;
mod product_id;
pub use json::JsonBody;
pub use product_id::ProductId;
