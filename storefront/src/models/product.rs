// storefront/src/models/product.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: Uuid,
  pub name: String,
  pub price: f64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>, // Description can be optional
  pub stock_quantity: i32,
}

/// A validated product that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
  pub name: String,
  pub price: f64,
  pub description: Option<String>,
  pub stock_quantity: i32,
}

impl NewProduct {
  pub fn new(name: impl Into<String>, price: f64, description: Option<String>, stock_quantity: i32) -> Result<Self> {
    let name = name.into();
    if name.trim().is_empty() {
      return Err(AppError::Validation("Product name is required".to_string()));
    }
    if !price.is_finite() || price < 0.0 {
      return Err(AppError::Validation(format!("Invalid product price: {}", price)));
    }
    if stock_quantity < 0 {
      return Err(AppError::Validation(format!(
        "Stock quantity cannot be negative (got {})",
        stock_quantity
      )));
    }
    Ok(Self {
      name,
      price,
      description,
      stock_quantity,
    })
  }

  pub fn into_product(self, id: Uuid) -> Product {
    Product {
      id,
      name: self.name,
      price: self.price,
      description: self.description,
      stock_quantity: self.stock_quantity,
    }
  }
}

impl Product {
  /// Whether `requested` units can be put in a cart right now.
  pub fn has_stock_for(&self, requested: i64) -> bool {
    requested <= i64::from(self.stock_quantity)
  }
}
