//! Product API: CRUD REST service for a single product resource.

pub mod config;
pub mod docs;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Settings, StoreKind, DEFAULT_BODY_LIMIT};
pub use error::{AppError, ConfigError};
pub use models::{Product, ProductCreate, ProductUpdate};
pub use routes::{app, common_routes_with_ready, docs_routes, product_routes};
pub use service::{MemoryProductRepository, ProductRepository, RequestValidator, SqliteProductRepository};
pub use state::AppState;
pub use store::{connect, connect_in_memory, ensure_data_dir, ensure_products_table};
