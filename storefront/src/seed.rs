// storefront/src/seed.rs

//! Demo catalogue inserted on startup when `SEED_DB=true`.

use tracing::{info, instrument};

use crate::errors::Result;
use crate::models::NewProduct;
use crate::store::ProductStore;

fn demo_catalogue() -> Result<Vec<NewProduct>> {
  Ok(vec![
    NewProduct::new("Stoneware Mug", 14.0, Some("350ml, dishwasher safe".to_string()), 25)?,
    NewProduct::new("Linen Apron", 32.5, Some("Adjustable neck strap".to_string()), 10)?,
    NewProduct::new("Walnut Cutting Board", 48.0, None, 5)?,
    NewProduct::new("Enamel Pot", 65.0, Some("4 litre".to_string()), 0)?,
  ])
}

/// Inserts the demo catalogue unless the store already holds products.
/// Returns how many products were inserted.
#[instrument(name = "seed::seed_products", skip(products))]
pub async fn seed_products(products: &dyn ProductStore) -> Result<usize> {
  if !products.list().await?.is_empty() {
    info!("Product store already populated; skipping seed.");
    return Ok(0);
  }

  let catalogue = demo_catalogue()?;
  let count = catalogue.len();
  for product in catalogue {
    products.insert(product).await?;
  }
  info!("Seeded {} products.", count);
  Ok(count)
}
