// storefront/src/main.rs

use std::sync::Arc;

use actix_web::{web as actix_data, App, HttpServer}; // `web` is the crate's own module
use anyhow::Context;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

use storefront::store::{MemoryStore, PgStore};
use storefront::{seed, web, AppConfig, AppState, StoreBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_span_events(FmtSpan::CLOSE) // handler timings
    .init();

  tracing::info!("Starting storefront server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(e.into());
    }
  };

  let app_state = match app_config.store_backend {
    StoreBackend::Postgres => {
      let database_url = app_config
        .database_url
        .as_deref()
        .context("DATABASE_URL is required for the postgres backend")?;
      let store = PgStore::connect(database_url, app_config.db_max_connections)
        .await
        .context("database connection failed")?;
      store.migrate().await.context("database migration failed")?;
      AppState::with_store(Arc::new(store), app_config.clone())
    }
    StoreBackend::Memory => {
      tracing::warn!("Using the in-memory store; data is lost on shutdown.");
      AppState::with_store(Arc::new(MemoryStore::new()), app_config.clone())
    }
  };

  if app_config.seed_db {
    seed::seed_products(app_state.products.as_ref())
      .await
      .context("seeding the product store failed")?;
  }

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .app_data(web::json_config())
      .wrap(tracing_actix_web::TracingLogger::default()) // one span per request
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("failed to bind {}", server_address))?
  .run()
  .await?;

  Ok(())
}
