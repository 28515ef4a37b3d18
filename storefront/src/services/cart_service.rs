// storefront/src/services/cart_service.rs

//! Cart line item operations: validation against product stock and ownership
//! checks against the authenticated user.
//!
//! The stock check and the cart write are separate store calls. Two concurrent
//! requests can both pass the check before either write lands; nothing here
//! serializes them.

use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::{AppError, Result};
use crate::models::cart_item::INVALID_QUANTITY_MESSAGE;
use crate::models::{CartItem, NewCartItem, Product, Quantity};
use crate::state::AppState;

const MISSING_FIELDS_MESSAGE: &str = "Product ID and quantity are required";
const PRODUCT_NOT_FOUND_MESSAGE: &str = "Product not found";
const CART_ITEM_NOT_FOUND_MESSAGE: &str = "Cart item not found";

/// Adds a new line to the user's cart. Duplicate lines for the same product are allowed.
#[instrument(name = "cart_service::add_to_cart", skip(app_state), fields(user_id = %user_id))]
pub async fn add_to_cart(
  app_state: &AppState,
  user_id: Uuid,
  product_id: Option<&str>,
  quantity: Option<i64>,
) -> Result<CartItem> {
  // 1. Validate input
  let (raw_product_id, raw_quantity) = match (product_id, quantity) {
    (Some(p), Some(q)) if !p.trim().is_empty() && q != 0 => (p, q),
    _ => {
      warn!("Add to cart rejected: missing product id or quantity.");
      return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
    }
  };
  let raw_quantity = require_minimum(raw_quantity)?;

  // 2. Fetch product (an id that does not parse cannot match a product)
  let product = match Uuid::parse_str(raw_product_id.trim()) {
    Ok(id) => fetch_product(app_state, id).await?,
    Err(_) => {
      warn!(product_id = raw_product_id, "Add to cart rejected: malformed product id.");
      return Err(AppError::NotFound(PRODUCT_NOT_FOUND_MESSAGE.to_string()));
    }
  };

  // 3. Check stock
  let quantity = ensure_stock(&product, raw_quantity)?;

  // 4. Create the cart line
  let item = app_state
    .cart_items
    .insert(NewCartItem::new(user_id, product.id, quantity))
    .await?;

  info!(
    cart_item_id = %item.id,
    product_id = %item.product_id,
    quantity = item.quantity,
    "Cart item created."
  );
  Ok(item)
}

/// Replaces the quantity of one of the user's cart lines.
#[instrument(name = "cart_service::update_cart_item", skip(app_state), fields(user_id = %user_id))]
pub async fn update_cart_item(
  app_state: &AppState,
  user_id: Uuid,
  cart_item_id: &str,
  quantity: Option<i64>,
) -> Result<CartItem> {
  let raw_quantity = match quantity {
    Some(q) => require_minimum(q)?,
    None => return Err(AppError::Validation(INVALID_QUANTITY_MESSAGE.to_string())),
  };

  let item = fetch_owned_item(app_state, user_id, cart_item_id, "update").await?;
  let product = fetch_product(app_state, item.product_id).await?;
  let quantity = ensure_stock(&product, raw_quantity)?;

  let updated = app_state
    .cart_items
    .update_quantity(item.id, quantity)
    .await?
    .ok_or_else(|| {
      warn!(cart_item_id = %item.id, "Cart item disappeared before the update was written.");
      AppError::NotFound(CART_ITEM_NOT_FOUND_MESSAGE.to_string())
    })?;

  info!(cart_item_id = %updated.id, quantity = updated.quantity, "Cart item updated.");
  Ok(updated)
}

/// Deletes one of the user's cart lines.
#[instrument(name = "cart_service::remove_cart_item", skip(app_state), fields(user_id = %user_id))]
pub async fn remove_cart_item(app_state: &AppState, user_id: Uuid, cart_item_id: &str) -> Result<()> {
  let item = fetch_owned_item(app_state, user_id, cart_item_id, "remove").await?;

  if !app_state.cart_items.delete(item.id).await? {
    warn!(cart_item_id = %item.id, "Cart item disappeared before it could be removed.");
    return Err(AppError::NotFound(CART_ITEM_NOT_FOUND_MESSAGE.to_string()));
  }

  info!(cart_item_id = %item.id, "Cart item removed.");
  Ok(())
}

#[instrument(name = "cart_service::list_cart", skip(app_state), fields(user_id = %user_id))]
pub async fn list_cart(app_state: &AppState, user_id: Uuid) -> Result<Vec<CartItem>> {
  let items = app_state.cart_items.list_for_user(user_id).await?;
  info!("Fetched {} cart items.", items.len());
  Ok(items)
}

async fn fetch_product(app_state: &AppState, product_id: Uuid) -> Result<Product> {
  app_state.products.find(product_id).await?.ok_or_else(|| {
    warn!(%product_id, "Product not found.");
    AppError::NotFound(PRODUCT_NOT_FOUND_MESSAGE.to_string())
  })
}

fn require_minimum(raw: i64) -> Result<i64> {
  if raw < 1 {
    warn!(quantity = raw, "Quantity below minimum.");
    return Err(AppError::Validation(INVALID_QUANTITY_MESSAGE.to_string()));
  }
  Ok(raw)
}

/// Compares the raw request against stock before narrowing it, so any amount
/// too large for a cart line is reported as exceeding stock.
fn ensure_stock(product: &Product, requested: i64) -> Result<Quantity> {
  if product.has_stock_for(requested) {
    return Quantity::new(requested);
  }
  warn!(
    product_id = %product.id,
    available = product.stock_quantity,
    requested,
    "Insufficient stock."
  );
  Err(AppError::Validation(format!(
    "Only {} items available in stock",
    product.stock_quantity
  )))
}

/// Loads a cart item and checks that `user_id` owns it. `action` only feeds the
/// 403 message.
///
/// An id that does not parse cannot match a stored item and is reported as 404.
async fn fetch_owned_item(app_state: &AppState, user_id: Uuid, raw_id: &str, action: &str) -> Result<CartItem> {
  let not_found = || AppError::NotFound(CART_ITEM_NOT_FOUND_MESSAGE.to_string());

  let Ok(cart_item_id) = Uuid::parse_str(raw_id) else {
    warn!(cart_item_id = raw_id, "Malformed cart item id.");
    return Err(not_found());
  };

  let item = app_state.cart_items.find(cart_item_id).await?.ok_or_else(|| {
    warn!(%cart_item_id, "Cart item not found.");
    not_found()
  })?;

  if !item.is_owned_by(user_id) {
    warn!(%cart_item_id, owner = %item.user_id, "Ownership check failed.");
    return Err(AppError::Forbidden(format!("Unauthorized to {} this cart item", action)));
  }
  Ok(item)
}
