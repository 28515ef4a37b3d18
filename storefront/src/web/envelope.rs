// storefront/src/web/envelope.rs

//! JSON envelope used by the cart routes: `{ success, data?, message?, error? }`.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
  pub success: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data: Option<T>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl<T> Envelope<T> {
  pub fn data(data: T) -> Self {
    Self {
      success: true,
      data: Some(data),
      message: None,
      error: None,
    }
  }

  pub fn message(message: impl Into<String>) -> Self {
    Self {
      success: true,
      data: None,
      message: Some(message.into()),
      error: None,
    }
  }

  pub fn failure(message: impl Into<String>, error: Option<String>) -> Self {
    Self {
      success: false,
      data: None,
      message: Some(message.into()),
      error,
    }
  }
}
