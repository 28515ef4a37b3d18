// storefront/src/web/mod.rs

pub mod envelope;
pub mod handlers;
pub mod routes;

use actix_web::web;

use crate::errors::AppError;

pub use routes::configure_app_routes;

/// JSON extractor config: malformed bodies become 400 validation errors in the
/// cart envelope.
pub fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err, _req| AppError::Validation(format!("Invalid request body: {}", err)).into())
}
