// storefront/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::errors::BareError;
use crate::services::product_service;
use crate::state::AppState;

// Product routes answer with the raw resource, and a bare `{ message }` on error.

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, BareError> {
  let products = product_service::list_products(app_state.get_ref()).await?;
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_str()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, BareError> {
  let product = product_service::get_product(app_state.get_ref(), &path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(product))
}
