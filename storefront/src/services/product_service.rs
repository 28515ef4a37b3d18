// storefront/src/services/product_service.rs

//! Read-only access to the product catalogue.

use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::{AppError, Result};
use crate::models::Product;
use crate::state::AppState;

#[instrument(name = "product_service::list_products", skip(app_state))]
pub async fn list_products(app_state: &AppState) -> Result<Vec<Product>> {
  let products = app_state.products.list().await?;
  info!("Fetched {} products.", products.len());
  Ok(products)
}

/// Looks up a product by its textual id. The id format is checked before the
/// store is touched.
#[instrument(name = "product_service::get_product", skip(app_state))]
pub async fn get_product(app_state: &AppState, raw_id: &str) -> Result<Product> {
  let product_id = Uuid::parse_str(raw_id).map_err(|e| {
    warn!(error = %e, "Rejected malformed product id.");
    AppError::Validation("Invalid product ID format".to_string())
  })?;

  match app_state.products.find(product_id).await? {
    Some(product) => {
      info!(%product_id, "Product fetched.");
      Ok(product)
    }
    None => {
      warn!(%product_id, "Product not found.");
      Err(AppError::NotFound("Product not found".to_string()))
    }
  }
}
