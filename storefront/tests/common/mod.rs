// tests/common/mod.rs
#![allow(dead_code)] // Each test binary uses a different subset of these helpers

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use storefront::models::{CartItem, NewCartItem, NewProduct, Product, Quantity};
use storefront::store::{CartStore, MemoryStore, ProductStore, StoreError, StoreResult};
use storefront::{AppConfig, AppState};
use tracing::Level;
use uuid::Uuid;

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// The application as `main.rs` wires it, minus the request logging middleware.
pub fn test_app(
  state: AppState,
) -> App<
  impl ServiceFactory<
    ServiceRequest,
    Config = (),
    Response = ServiceResponse<impl MessageBody>,
    Error = actix_web::Error,
    InitError = (),
  >,
> {
  App::new()
    .app_data(web::Data::new(state))
    .app_data(storefront::web::json_config())
    .configure(storefront::web::configure_app_routes)
}

pub fn memory_state() -> (AppState, Arc<MemoryStore>) {
  setup_tracing();
  AppState::in_memory()
}

pub async fn seed_product(store: &MemoryStore, name: &str, stock: i32) -> Product {
  ProductStore::insert(store, NewProduct::new(name, 9.99, None, stock).unwrap())
    .await
    .unwrap()
}

// --- Store double whose every call fails ---
#[derive(Debug, Default)]
pub struct FailingStore {
  pub calls: AtomicUsize,
}

impl FailingStore {
  fn fail<T>(&self) -> StoreResult<T> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    Err(StoreError::Unavailable("connection refused".to_string()))
  }

  pub fn call_count(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl ProductStore for FailingStore {
  async fn list(&self) -> StoreResult<Vec<Product>> {
    self.fail()
  }

  async fn find(&self, _id: Uuid) -> StoreResult<Option<Product>> {
    self.fail()
  }

  async fn insert(&self, _product: NewProduct) -> StoreResult<Product> {
    self.fail()
  }
}

#[async_trait]
impl CartStore for FailingStore {
  async fn find(&self, _id: Uuid) -> StoreResult<Option<CartItem>> {
    self.fail()
  }

  async fn list_for_user(&self, _user_id: Uuid) -> StoreResult<Vec<CartItem>> {
    self.fail()
  }

  async fn insert(&self, _item: NewCartItem) -> StoreResult<CartItem> {
    self.fail()
  }

  async fn update_quantity(&self, _id: Uuid, _quantity: Quantity) -> StoreResult<Option<CartItem>> {
    self.fail()
  }

  async fn delete(&self, _id: Uuid) -> StoreResult<bool> {
    self.fail()
  }
}

pub fn failing_state() -> (AppState, Arc<FailingStore>) {
  setup_tracing();
  let store = Arc::new(FailingStore::default());
  (AppState::with_store(store.clone(), Arc::new(AppConfig::in_memory())), store)
}
