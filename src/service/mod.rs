//! Product persistence and request validation.

mod memory;
mod repository;
mod validation;
pub use memory::MemoryProductRepository;
pub use repository::{ProductRepository, SqliteProductRepository};
pub use validation::*;
