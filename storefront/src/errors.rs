// storefront/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;
use crate::web::envelope::Envelope;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Authentication Failed: {0}")]
  Auth(String),

  #[error("Access Denied: {0}")]
  Forbidden(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Store Error: {0}")]
  Store(#[from] StoreError),

  /// A failure that was caught at an operation boundary and given an
  /// operation-specific message. `detail` carries the underlying error text.
  #[error("{message}: {detail}")]
  Server { message: String, detail: String },
}

impl AppError {
  /// Turns server-side failures into `AppError::Server` tagged with `message`.
  /// Client errors (validation, auth, not-found) pass through untouched.
  pub fn at_boundary(self, message: &str) -> Self {
    match self {
      AppError::Store(e) => AppError::Server {
        message: message.to_string(),
        detail: e.to_string(),
      },
      AppError::Config(detail) => AppError::Server {
        message: message.to_string(),
        detail,
      },
      other => other,
    }
  }

  /// The message shown to API clients.
  pub fn public_message(&self) -> String {
    match self {
      AppError::Validation(m) | AppError::Auth(m) | AppError::Forbidden(m) | AppError::NotFound(m) => m.clone(),
      AppError::Config(_) | AppError::Store(_) => "Server error".to_string(),
      AppError::Server { message, .. } => message.clone(),
    }
  }

  /// Underlying error text, only exposed for server-side failures.
  pub fn detail(&self) -> Option<String> {
    match self {
      AppError::Config(detail) => Some(detail.clone()),
      AppError::Store(e) => Some(e.to_string()),
      AppError::Server { detail, .. } => Some(detail.clone()),
      _ => None,
    }
  }

  fn log(&self) {
    if self.status_code().is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, "Responding with client error");
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::Auth(_) => StatusCode::UNAUTHORIZED,
      AppError::Forbidden(_) => StatusCode::FORBIDDEN,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Store(_) | AppError::Server { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  // Cart routes use the `{ success, message, error? }` envelope.
  fn error_response(&self) -> HttpResponse {
    self.log();
    HttpResponse::build(self.status_code()).json(Envelope::<()>::failure(self.public_message(), self.detail()))
  }
}

/// Error wrapper for the product routes, which answer with a bare `{ message }`
/// body instead of the cart envelope.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct BareError(#[from] pub AppError);

impl ResponseError for BareError {
  fn status_code(&self) -> StatusCode {
    self.0.status_code()
  }

  fn error_response(&self) -> HttpResponse {
    self.0.log();
    HttpResponse::build(self.status_code()).json(json!({ "message": self.0.public_message() }))
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
