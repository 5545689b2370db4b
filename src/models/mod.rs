//! Product entity and its request shapes.

mod dto;
mod product;

pub use dto::{ProductCreate, ProductInput, ProductUpdate};
pub use product::{now, Product};
