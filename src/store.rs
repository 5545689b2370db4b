//! SQLite connection setup and `products` table DDL.

use crate::config::Settings;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;

const PRODUCTS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT DEFAULT '',
        price REAL NOT NULL,
        quantity INTEGER DEFAULT 0,
        created_at TIMESTAMP,
        updated_at TIMESTAMP,
        sku TEXT DEFAULT '',
        barcode TEXT DEFAULT '',
        deleted_at TIMESTAMP
    )
"#;

/// Columns that older databases may lack, with the definition used to add them.
/// SQLite only allows constant defaults on `ADD COLUMN`.
const UPGRADE_COLUMNS: &[(&str, &str)] = &[
    ("description", "TEXT DEFAULT ''"),
    ("quantity", "INTEGER DEFAULT 0"),
    ("created_at", "TIMESTAMP"),
    ("updated_at", "TIMESTAMP"),
    ("sku", "TEXT DEFAULT ''"),
    ("barcode", "TEXT DEFAULT ''"),
    ("deleted_at", "TIMESTAMP"),
];

/// Create the parent directory of the database file if it does not exist.
pub async fn ensure_data_dir(database_path: &Path) -> Result<(), AppError> {
    if let Some(dir) = database_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !tokio::fs::try_exists(dir).await? {
            tokio::fs::create_dir_all(dir).await?;
            tracing::info!(dir = %dir.display(), "created database directory");
        }
    }
    Ok(())
}

/// Open a pool on the configured database file, creating the file if missing.
pub async fn connect(settings: &Settings) -> Result<SqlitePool, AppError> {
    ensure_data_dir(&settings.database_path).await?;
    let options = SqliteConnectOptions::new()
        .filename(&settings.database_path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(options)
        .await?;
    tracing::info!(path = %settings.database_path.display(), "connected to SQLite database");
    Ok(pool)
}

/// Private in-memory database. One connection that never expires, so the data lives
/// as long as the pool.
pub async fn connect_in_memory() -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Create `products` if absent, then add any column an older schema is missing.
pub async fn ensure_products_table(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(PRODUCTS_DDL).execute(pool).await?;

    let existing: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info('products')")
        .fetch_all(pool)
        .await?;
    for (column, definition) in UPGRADE_COLUMNS {
        if existing.iter().any(|c| c == column) {
            continue;
        }
        let alter = format!("ALTER TABLE products ADD COLUMN {} {}", column, definition);
        tracing::info!(sql = %alter, "upgrading products table");
        sqlx::query(&alter).execute(pool).await?;
    }
    Ok(())
}
