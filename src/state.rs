//! Shared application state for all routes.

use crate::service::{MemoryProductRepository, ProductRepository, SqliteProductRepository};
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Constructed once at startup and injected here; handlers never reach for a global handle.
    pub products: Arc<dyn ProductRepository>,
}

impl AppState {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub fn sqlite(pool: SqlitePool) -> Self {
        Self::new(Arc::new(SqliteProductRepository::new(pool)))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryProductRepository::new()))
    }
}
