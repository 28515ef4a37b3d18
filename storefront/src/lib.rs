// storefront/src/lib.rs

//! Storefront: product catalogue and per-user cart HTTP service.
//!
//! Cart operations validate requested quantities against product stock and
//! only let the owning user change or remove a cart line. Persistence sits
//! behind the `ProductStore` / `CartStore` traits, with a Postgres backend and
//! an in-memory one.

pub mod config;
pub mod errors;
pub mod models;
pub mod seed;
pub mod services;
pub mod state;
pub mod store;
pub mod web;

pub use crate::config::{AppConfig, StoreBackend};
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
