// storefront/src/models/cart_item.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::{AppError, Result};

/// Message used whenever a quantity fails the `>= 1` rule.
pub const INVALID_QUANTITY_MESSAGE: &str = "Valid quantity (minimum 1) is required";

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
  pub id: Uuid, // Primary key for the cart_item itself
  pub user_id: Uuid,
  pub product_id: Uuid,
  pub quantity: i32,
  pub added_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl CartItem {
  pub fn is_owned_by(&self, user_id: Uuid) -> bool {
    self.user_id == user_id
  }
}

/// A cart line quantity, always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(i32);

impl Quantity {
  pub fn new(raw: i64) -> Result<Self> {
    if raw < 1 {
      return Err(AppError::Validation(INVALID_QUANTITY_MESSAGE.to_string()));
    }
    let value = i32::try_from(raw).map_err(|_| AppError::Validation(format!("Quantity {} is too large", raw)))?;
    Ok(Self(value))
  }

  pub fn get(self) -> i32 {
    self.0
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItem {
  pub user_id: Uuid,
  pub product_id: Uuid,
  pub quantity: Quantity,
}

impl NewCartItem {
  pub fn new(user_id: Uuid, product_id: Uuid, quantity: Quantity) -> Self {
    Self {
      user_id,
      product_id,
      quantity,
    }
  }

  pub fn into_cart_item(self, id: Uuid, now: DateTime<Utc>) -> CartItem {
    CartItem {
      id,
      user_id: self.user_id,
      product_id: self.product_id,
      quantity: self.quantity.get(),
      added_at: now,
      updated_at: now,
    }
  }
}
