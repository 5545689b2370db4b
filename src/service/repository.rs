//! Product repository seam and its SQLite implementation.
//!
//! Deletes are soft: rows get `deleted_at` and drop out of every read. Update and
//! delete report not-found from the affected-row count of the write itself.

use crate::error::AppError;
use crate::models::{now, Product};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new row; fills in `id`, `created_at` and `updated_at`.
    async fn create(&self, product: &mut Product) -> Result<(), AppError>;

    /// Every live row in insertion order. Empty table yields an empty vec.
    async fn get_all(&self) -> Result<Vec<Product>, AppError>;

    async fn get_by_id(&self, id: i64) -> Result<Product, AppError>;

    /// Overwrite the mutable columns of the live row `product.id` and refresh `updated_at`.
    async fn update(&self, product: &mut Product) -> Result<(), AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Liveness check used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}

/// Columns read back for every product. `COALESCE` covers rows written before
/// a column existed or while it was nullable.
const SELECT_COLUMNS: &str = "id, name, COALESCE(description, '') AS description, price, \
     COALESCE(quantity, 0) AS quantity, created_at, updated_at, \
     COALESCE(sku, '') AS sku, COALESCE(barcode, '') AS barcode, deleted_at";

pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn create(&self, product: &mut Product) -> Result<(), AppError> {
        let sql = "INSERT INTO products (name, description, price, quantity, sku, barcode, created_at, updated_at) \
                   VALUES (?, ?, ?, ?, ?, ?, ?, ?)";
        tracing::debug!(sql = %sql, "query");
        let at = now();
        let result = sqlx::query(sql)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.quantity)
            .bind(&product.sku)
            .bind(&product.barcode)
            .bind(at)
            .bind(at)
            .execute(&self.pool)
            .await?;
        product.id = result.last_insert_rowid();
        product.stamp_created(at);
        product.deleted_at = None;
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Product>, AppError> {
        let sql = format!("SELECT {} FROM products WHERE deleted_at IS NULL ORDER BY id", SELECT_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Product>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, AppError> {
        let sql = format!("SELECT {} FROM products WHERE id = ? AND deleted_at IS NULL", SELECT_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound(id))
    }

    async fn update(&self, product: &mut Product) -> Result<(), AppError> {
        let sql = "UPDATE products SET name = ?, description = ?, price = ?, quantity = ?, sku = ?, barcode = ?, \
                   updated_at = ? WHERE id = ? AND deleted_at IS NULL";
        tracing::debug!(sql = %sql, id = product.id, "query");
        let at = product.next_updated_at();
        let result = sqlx::query(sql)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.quantity)
            .bind(&product.sku)
            .bind(&product.barcode)
            .bind(at)
            .bind(product.id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(product.id));
        }
        product.updated_at = Some(at);
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let sql = "UPDATE products SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(now()).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{connect_in_memory, ensure_products_table};

    async fn repo() -> SqliteProductRepository {
        let pool = connect_in_memory().await.unwrap();
        ensure_products_table(&pool).await.unwrap();
        SqliteProductRepository::new(pool)
    }

    fn widget() -> Product {
        Product {
            name: "Widget".into(),
            description: "A small widget".into(),
            price: 9.99,
            quantity: 5,
            sku: "W-1".into(),
            barcode: "0001".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn deleted_rows_stay_in_table() {
        let repo = repo().await;
        let mut product = widget();
        repo.create(&mut product).await.unwrap();
        repo.delete(product.id).await.unwrap();

        let marked: Option<chrono::DateTime<chrono::Utc>> =
            sqlx::query_scalar("SELECT deleted_at FROM products WHERE id = ?")
                .bind(product.id)
                .fetch_one(repo.pool())
                .await
                .unwrap();
        assert!(marked.is_some());
        assert!(matches!(repo.get_by_id(product.id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_of_deleted_row_is_not_found() {
        let repo = repo().await;
        let mut product = widget();
        repo.create(&mut product).await.unwrap();
        repo.delete(product.id).await.unwrap();
        product.name = "Revived".into();
        assert!(matches!(repo.update(&mut product).await, Err(AppError::NotFound(_))));
        assert!(matches!(repo.delete(product.id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = repo().await;
        let mut first = widget();
        repo.create(&mut first).await.unwrap();
        repo.delete(first.id).await.unwrap();
        let mut second = widget();
        repo.create(&mut second).await.unwrap();
        assert!(second.id > first.id);
    }
}
