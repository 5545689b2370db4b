//! Process-local product store. Same contract as the SQLite repository, nothing survives a restart.

use super::ProductRepository;
use crate::error::AppError;
use crate::models::{now, Product};
use async_trait::async_trait;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Table {
    rows: Vec<Product>,
    last_id: i64,
}

#[derive(Default)]
pub struct MemoryProductRepository {
    table: RwLock<Table>,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Table>, AppError> {
        self.table
            .read()
            .map_err(|_| AppError::Internal("product table lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Table>, AppError> {
        self.table
            .write()
            .map_err(|_| AppError::Internal("product table lock poisoned".into()))
    }
}

impl Table {
    fn live_mut(&mut self, id: i64) -> Option<&mut Product> {
        self.rows.iter_mut().find(|p| p.id == id && !p.is_deleted())
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn create(&self, product: &mut Product) -> Result<(), AppError> {
        let mut table = self.write()?;
        table.last_id += 1;
        product.id = table.last_id;
        product.stamp_created(now());
        product.deleted_at = None;
        table.rows.push(product.clone());
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Product>, AppError> {
        let table = self.read()?;
        Ok(table.rows.iter().filter(|p| !p.is_deleted()).cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, AppError> {
        let table = self.read()?;
        table
            .rows
            .iter()
            .find(|p| p.id == id && !p.is_deleted())
            .cloned()
            .ok_or(AppError::NotFound(id))
    }

    async fn update(&self, product: &mut Product) -> Result<(), AppError> {
        let mut table = self.write()?;
        let row = table.live_mut(product.id).ok_or(AppError::NotFound(product.id))?;
        let at = row.next_updated_at();
        row.name = product.name.clone();
        row.description = product.description.clone();
        row.price = product.price;
        row.quantity = product.quantity;
        row.sku = product.sku.clone();
        row.barcode = product.barcode.clone();
        row.updated_at = Some(at);
        *product = row.clone();
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut table = self.write()?;
        let row = table.live_mut(id).ok_or(AppError::NotFound(id))?;
        row.deleted_at = Some(now());
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }
}
