// storefront/src/store/memory.rs

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::{CartStore, ProductStore, StoreResult};
use crate::models::{CartItem, NewCartItem, NewProduct, Product, Quantity};

/// In-process store. Records are kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
  products: RwLock<Vec<Product>>,
  cart_items: RwLock<Vec<CartItem>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn cart_item_count(&self) -> usize {
    self.cart_items.read().len()
  }
}

#[async_trait]
impl ProductStore for MemoryStore {
  async fn list(&self) -> StoreResult<Vec<Product>> {
    Ok(self.products.read().clone())
  }

  async fn find(&self, id: Uuid) -> StoreResult<Option<Product>> {
    Ok(self.products.read().iter().find(|p| p.id == id).cloned())
  }

  async fn insert(&self, product: NewProduct) -> StoreResult<Product> {
    let product = product.into_product(Uuid::new_v4());
    self.products.write().push(product.clone());
    debug!(product_id = %product.id, "Inserted product into memory store.");
    Ok(product)
  }
}

#[async_trait]
impl CartStore for MemoryStore {
  async fn find(&self, id: Uuid) -> StoreResult<Option<CartItem>> {
    Ok(self.cart_items.read().iter().find(|item| item.id == id).cloned())
  }

  async fn list_for_user(&self, user_id: Uuid) -> StoreResult<Vec<CartItem>> {
    Ok(
      self
        .cart_items
        .read()
        .iter()
        .filter(|item| item.user_id == user_id)
        .cloned()
        .collect(),
    )
  }

  async fn insert(&self, item: NewCartItem) -> StoreResult<CartItem> {
    let item = item.into_cart_item(Uuid::new_v4(), Utc::now());
    self.cart_items.write().push(item.clone());
    debug!(cart_item_id = %item.id, "Inserted cart item into memory store.");
    Ok(item)
  }

  async fn update_quantity(&self, id: Uuid, quantity: Quantity) -> StoreResult<Option<CartItem>> {
    let mut guard = self.cart_items.write();
    Ok(guard.iter_mut().find(|item| item.id == id).map(|item| {
      item.quantity = quantity.get();
      item.updated_at = Utc::now();
      item.clone()
    }))
  }

  async fn delete(&self, id: Uuid) -> StoreResult<bool> {
    let mut guard = self.cart_items.write();
    let before = guard.len();
    guard.retain(|item| item.id != id);
    Ok(guard.len() != before)
  }
}
