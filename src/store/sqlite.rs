//! SQLite-backed `ProductStore` using a sqlx pool.

use super::ProductStore;
use crate::error::StoreError;
use crate::model::{NewProduct, Product};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

const PRODUCTS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        seller TEXT NOT NULL,
        price TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
"#;

const COLUMNS: &str = "id, name, seller, price, created_at, updated_at";

pub struct SqliteStore {
    pool: SqlitePool,
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

impl SqliteStore {
    /// Open (creating the file if needed) and ensure the `products` table exists.
    /// In-memory URLs get a single long-lived connection so every query sees the same database.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool_options = if is_memory_url(url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections)
        };
        let pool = pool_options.connect_with(options).await?;
        let store = SqliteStore { pool };
        store.ensure_schema().await?;
        tracing::info!(url = %url, "product store ready");
        Ok(store)
    }

    /// Fresh, isolated in-memory store.
    pub async fn in_memory() -> Result<Self, StoreError> {
        Self::connect("sqlite::memory:", 1).await
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        tracing::debug!(sql = %PRODUCTS_DDL, "query");
        sqlx::query(PRODUCTS_DDL)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Migration(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl ProductStore for SqliteStore {
    async fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        let sql = format!("SELECT {} FROM products ORDER BY id ASC", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Product>, StoreError> {
        let sql = format!("SELECT {} FROM products WHERE id = ?", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, StoreError> {
        let sql = format!(
            "INSERT INTO products (name, seller, price, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let now = Utc::now();
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(product.name.trim())
            .bind(product.seller.trim())
            .bind(&product.price)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i64, product: &NewProduct) -> Result<Option<Product>, StoreError> {
        let sql = format!(
            "UPDATE products SET name = ?, seller = ?, price = ?, updated_at = ? \
             WHERE id = ? RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(product.name.trim())
            .bind(product.seller.trim())
            .bind(&product.price)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_one(&self, id: i64) -> Result<Option<Product>, StoreError> {
        let sql = format!("DELETE FROM products WHERE id = ? RETURNING {}", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_all(&self) -> Result<i64, StoreError> {
        let mut tx = self.pool.begin().await?;
        tracing::debug!("delete all products (tx)");
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM products").execute(&mut *tx).await?;
        // AUTOINCREMENT keeps its high-water mark in sqlite_sequence.
        sqlx::query("DELETE FROM sqlite_sequence WHERE name = 'products'")
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(count)
    }

    async fn next_id(&self) -> Result<i64, StoreError> {
        let sql = "SELECT COALESCE(MAX(id), 0) + 1 FROM products";
        tracing::debug!(sql = %sql, "query");
        let next: i64 = sqlx::query_scalar(sql).fetch_one(&self.pool).await?;
        Ok(next)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let sql = "SELECT COUNT(*) FROM products";
        tracing::debug!(sql = %sql, "query");
        let count: i64 = sqlx::query_scalar(sql).fetch_one(&self.pool).await?;
        Ok(count)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
