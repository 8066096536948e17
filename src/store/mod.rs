//! Persistence layer: the `products` table behind an injectable trait.
//!
//! Handlers only see `dyn ProductStore`, so the server can run against a file-backed
//! database while tests use an isolated in-memory one.

mod sqlite;

pub use sqlite::SqliteStore;

use crate::error::StoreError;
use crate::model::{NewProduct, Product};
use async_trait::async_trait;

/// Table operations. An absent id is `Ok(None)`, never an error; `Err` is reserved for
/// storage faults.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products by ascending id.
    async fn list_all(&self) -> Result<Vec<Product>, StoreError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Product>, StoreError>;

    /// Insert one product; the store assigns the id.
    async fn create(&self, product: &NewProduct) -> Result<Product, StoreError>;

    /// Replace name, seller and price of an existing product.
    async fn update(&self, id: i64, product: &NewProduct) -> Result<Option<Product>, StoreError>;

    /// Delete one product and return the row as it was.
    async fn delete_one(&self, id: i64) -> Result<Option<Product>, StoreError>;

    /// Delete every product and reset id assignment to 1. Returns the number removed.
    async fn delete_all(&self) -> Result<i64, StoreError>;

    /// `max(id) + 1`, or 1 on an empty table. Advisory only: nothing is reserved, and after
    /// deleting the highest row it can be lower than the id the next insert receives.
    async fn next_id(&self) -> Result<i64, StoreError>;

    async fn count(&self) -> Result<i64, StoreError>;

    /// Release connections. Called once at shutdown.
    async fn close(&self);
}
