// storefront/src/web/handlers/cart_handlers.rs

use actix_web::{web, FromRequest, HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::services::cart_service;
use crate::state::AppState;
use crate::web::envelope::Envelope;

pub const USER_ID_HEADER: &str = "X-User-ID";

// --- Authentication gate ---
// Resolves the caller's identity before any cart handler runs. Token
// verification happens upstream; this only trusts the resolved user id header.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
  pub user_id: Uuid,
}

impl FromRequest for AuthenticatedUser {
  type Error = AppError;
  type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    let user_id = req
      .headers()
      .get(USER_ID_HEADER)
      .and_then(|value| value.to_str().ok())
      .and_then(|value| Uuid::parse_str(value.trim()).ok());

    match user_id {
      Some(user_id) => futures_util::future::ready(Ok(AuthenticatedUser { user_id })),
      None => {
        warn!("AuthenticatedUser extractor: Missing or invalid {} header.", USER_ID_HEADER);
        futures_util::future::ready(Err(AppError::Auth("Authentication required".to_string())))
      }
    }
  }
}

// --- Request DTOs ---
// Fields are optional so that absent values become validation errors with the
// envelope rather than extractor rejections.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequestPayload {
  pub product_id: Option<String>,
  pub quantity: Option<i64>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateCartItemRequestPayload {
  pub quantity: Option<i64>,
}

// --- Handler Implementations ---

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, req_payload, auth_user),
    fields(user_id = %auth_user.user_id)
)]
pub async fn add_to_cart_handler(
  auth_user: AuthenticatedUser, // Extracted first so unauthenticated calls fail before body parsing
  app_state: web::Data<AppState>,
  req_payload: web::Json<AddToCartRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = req_payload.into_inner();
  info!(
    "Add to cart attempt: product {:?}, quantity {:?}",
    payload.product_id, payload.quantity
  );

  let item = cart_service::add_to_cart(
    app_state.get_ref(),
    auth_user.user_id,
    payload.product_id.as_deref(),
    payload.quantity,
  )
  .await
  .map_err(|e| e.at_boundary("Server error while adding to cart"))?;

  Ok(HttpResponse::Created().json(Envelope::data(item)))
}

#[instrument(
    name = "handler::update_cart_item",
    skip(app_state, path, req_payload, auth_user),
    fields(user_id = %auth_user.user_id, cart_item_id = %path.as_str())
)]
pub async fn update_cart_item_handler(
  auth_user: AuthenticatedUser,
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  req_payload: web::Json<UpdateCartItemRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let cart_item_id = path.into_inner();

  let item = cart_service::update_cart_item(
    app_state.get_ref(),
    auth_user.user_id,
    &cart_item_id,
    req_payload.quantity,
  )
  .await
  .map_err(|e| e.at_boundary("Server error while updating cart"))?;

  Ok(HttpResponse::Ok().json(Envelope::data(item)))
}

#[instrument(
    name = "handler::remove_cart_item",
    skip(app_state, path, auth_user),
    fields(user_id = %auth_user.user_id, cart_item_id = %path.as_str())
)]
pub async fn remove_cart_item_handler(
  auth_user: AuthenticatedUser,
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let cart_item_id = path.into_inner();

  cart_service::remove_cart_item(app_state.get_ref(), auth_user.user_id, &cart_item_id)
    .await
    .map_err(|e| e.at_boundary("Server error while removing cart item"))?;

  Ok(HttpResponse::Ok().json(Envelope::<()>::message("Cart item removed successfully")))
}

#[instrument(name = "handler::list_cart", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn list_cart_handler(
  auth_user: AuthenticatedUser,
  app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
  let items = cart_service::list_cart(app_state.get_ref(), auth_user.user_id)
    .await
    .map_err(|e| e.at_boundary("Server error while fetching cart"))?;

  Ok(HttpResponse::Ok().json(Envelope::data(items)))
}
