// storefront/src/store/postgres.rs

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{error, info};
use uuid::Uuid;

use super::{CartStore, ProductStore, StoreResult};
use crate::models::{CartItem, NewCartItem, NewProduct, Product, Quantity};

const PRODUCT_COLUMNS: &str = "id, name, price, description, stock_quantity";
const CART_ITEM_COLUMNS: &str = "id, user_id, product_id, quantity, added_at, updated_at";

#[derive(Debug, Clone)]
pub struct PgStore {
  pool: PgPool,
}

impl PgStore {
  pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
    let pool = PgPoolOptions::new()
      .max_connections(max_connections)
      .acquire_timeout(Duration::from_secs(8))
      .connect(database_url)
      .await
      .map_err(|e| {
        error!("Failed to connect to the database: {}", e);
        e
      })?;
    info!("Successfully connected to the database.");
    Ok(Self { pool })
  }

  /// Applies the embedded schema migrations.
  pub async fn migrate(&self) -> StoreResult<()> {
    sqlx::migrate!("./migrations").run(&self.pool).await?;
    info!("Database migrations applied.");
    Ok(())
  }
}

#[async_trait]
impl ProductStore for PgStore {
  async fn list(&self) -> StoreResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(&format!(
      "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY name ASC, id ASC"
    ))
    .fetch_all(&self.pool)
    .await?;
    Ok(products)
  }

  async fn find(&self, id: Uuid) -> StoreResult<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(&format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"))
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;
    Ok(product)
  }

  async fn insert(&self, product: NewProduct) -> StoreResult<Product> {
    let product = sqlx::query_as::<_, Product>(&format!(
      "INSERT INTO products (id, name, price, description, stock_quantity) VALUES ($1, $2, $3, $4, $5) \
       RETURNING {PRODUCT_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(&product.name)
    .bind(product.price)
    .bind(&product.description)
    .bind(product.stock_quantity)
    .fetch_one(&self.pool)
    .await?;
    Ok(product)
  }
}

#[async_trait]
impl CartStore for PgStore {
  async fn find(&self, id: Uuid) -> StoreResult<Option<CartItem>> {
    let item = sqlx::query_as::<_, CartItem>(&format!("SELECT {CART_ITEM_COLUMNS} FROM cart_items WHERE id = $1"))
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;
    Ok(item)
  }

  async fn list_for_user(&self, user_id: Uuid) -> StoreResult<Vec<CartItem>> {
    let items = sqlx::query_as::<_, CartItem>(&format!(
      "SELECT {CART_ITEM_COLUMNS} FROM cart_items WHERE user_id = $1 ORDER BY added_at ASC, id ASC"
    ))
    .bind(user_id)
    .fetch_all(&self.pool)
    .await?;
    Ok(items)
  }

  async fn insert(&self, item: NewCartItem) -> StoreResult<CartItem> {
    let item = sqlx::query_as::<_, CartItem>(&format!(
      "INSERT INTO cart_items (id, user_id, product_id, quantity, added_at, updated_at) \
       VALUES ($1, $2, $3, $4, NOW(), NOW()) RETURNING {CART_ITEM_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(item.user_id)
    .bind(item.product_id)
    .bind(item.quantity.get())
    .fetch_one(&self.pool)
    .await?;
    Ok(item)
  }

  async fn update_quantity(&self, id: Uuid, quantity: Quantity) -> StoreResult<Option<CartItem>> {
    let item = sqlx::query_as::<_, CartItem>(&format!(
      "UPDATE cart_items SET quantity = $2, updated_at = NOW() WHERE id = $1 RETURNING {CART_ITEM_COLUMNS}"
    ))
    .bind(id)
    .bind(quantity.get())
    .fetch_optional(&self.pool)
    .await?;
    Ok(item)
  }

  async fn delete(&self, id: Uuid) -> StoreResult<bool> {
    let result = sqlx::query("DELETE FROM cart_items WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected() == 1)
  }
}
