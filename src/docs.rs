//! OpenAPI document for the product routes.

use crate::handlers::product;
use crate::models::{Product, ProductCreate, ProductUpdate};
use crate::response::{ErrorBody, MessageBody};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Product API", version = "1.0", description = "CRUD API for products"),
    paths(product::create, product::list, product::read, product::update, product::delete),
    components(schemas(Product, ProductCreate, ProductUpdate, ErrorBody, MessageBody)),
    tags((name = "products", description = "Product management"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_product_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/products"));
        assert!(doc.paths.paths.contains_key("/api/v1/products/{id}"));
    }
}
