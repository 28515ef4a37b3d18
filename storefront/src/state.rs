// storefront/src/state.rs
use crate::config::AppConfig;
use crate::store::{CartStore, MemoryStore, ProductStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub products: Arc<dyn ProductStore>,
  pub cart_items: Arc<dyn CartStore>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(products: Arc<dyn ProductStore>, cart_items: Arc<dyn CartStore>, config: Arc<AppConfig>) -> Self {
    Self {
      products,
      cart_items,
      config,
    }
  }

  /// State backed by a single store implementing both traits.
  pub fn with_store<S>(store: Arc<S>, config: Arc<AppConfig>) -> Self
  where
    S: ProductStore + CartStore + 'static,
  {
    Self::new(store.clone(), store, config)
  }

  pub fn in_memory() -> (Self, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (Self::with_store(store.clone(), Arc::new(AppConfig::in_memory())), store)
  }
}
