// storefront/src/store/mod.rs

//! Persistence traits for products and cart items, plus the two backends.
//!
//! Every method is a single read or write. Nothing here spans several calls
//! atomically, so a stock check followed by a cart write can race with a
//! concurrent request.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{CartItem, NewCartItem, NewProduct, Product, Quantity};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("migration error: {0}")]
  Migration(#[from] sqlx::migrate::MigrateError),

  #[error("store unavailable: {0}")]
  Unavailable(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[async_trait]
pub trait ProductStore: Send + Sync {
  async fn list(&self) -> StoreResult<Vec<Product>>;

  async fn find(&self, id: Uuid) -> StoreResult<Option<Product>>;

  async fn insert(&self, product: NewProduct) -> StoreResult<Product>;
}

#[async_trait]
pub trait CartStore: Send + Sync {
  async fn find(&self, id: Uuid) -> StoreResult<Option<CartItem>>;

  async fn list_for_user(&self, user_id: Uuid) -> StoreResult<Vec<CartItem>>;

  async fn insert(&self, item: NewCartItem) -> StoreResult<CartItem>;

  /// Returns `None` when no item with `id` exists.
  async fn update_quantity(&self, id: Uuid, quantity: Quantity) -> StoreResult<Option<CartItem>>;

  /// Returns whether a record was removed.
  async fn delete(&self, id: Uuid) -> StoreResult<bool>;
}
