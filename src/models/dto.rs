//! Client-supplied shapes. Only these fields are accepted from a request body.

use super::Product;
use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;

/// Fields shared by the create and update shapes, read by the validator.
pub trait ProductInput {
    fn name(&self) -> &str;
    fn price(&self) -> f64;
    fn quantity(&self) -> i64;
}

/// Treat an explicit JSON `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /products`.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProductCreate {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub sku: String,
    #[serde(deserialize_with = "null_as_default")]
    pub barcode: String,
}

/// Body of `PUT /products/{id}`. Applied wholesale: omitted fields reset to their defaults.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProductUpdate {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub sku: String,
    #[serde(deserialize_with = "null_as_default")]
    pub barcode: String,
}

impl ProductCreate {
    /// New entity with no identity; id and timestamps are assigned on insert.
    pub fn into_product(self) -> Product {
        Product {
            name: self.name,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
            sku: self.sku,
            barcode: self.barcode,
            ..Default::default()
        }
    }
}

impl ProductUpdate {
    /// Overwrite every mutable field. `id`, `created_at` and `updated_at` are left alone.
    pub fn apply_to(self, product: &mut Product) {
        product.name = self.name;
        product.description = self.description;
        product.price = self.price;
        product.quantity = self.quantity;
        product.sku = self.sku;
        product.barcode = self.barcode;
    }
}

impl ProductInput for ProductCreate {
    fn name(&self) -> &str {
        &self.name
    }
    fn price(&self) -> f64 {
        self.price
    }
    fn quantity(&self) -> i64 {
        self.quantity
    }
}

impl ProductInput for ProductUpdate {
    fn name(&self) -> &str {
        &self.name
    }
    fn price(&self) -> f64 {
        self.price
    }
    fn quantity(&self) -> i64 {
        self.quantity
    }
}
