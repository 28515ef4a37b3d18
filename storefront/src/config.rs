// storefront/src/config.rs

use std::env;
use std::str::FromStr;

use dotenvy::dotenv;

use crate::errors::{AppError, Result};

/// Which persistence backend the server runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
  Postgres,
  Memory,
}

impl FromStr for StoreBackend {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
      "memory" | "in-memory" => Ok(StoreBackend::Memory),
      other => Err(AppError::Config(format!(
        "Invalid STORE_BACKEND '{}': expected 'postgres' or 'memory'",
        other
      ))),
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub store_backend: StoreBackend,
  pub database_url: Option<String>,
  pub db_max_connections: u32,

  // Optional: for seeding the product catalogue on startup
  pub seed_db: bool,
}

/// The values `from_lookup` falls back to for unset variables.
impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 8080,
      store_backend: StoreBackend::Postgres,
      database_url: None,
      db_max_connections: 10,
      seed_db: false,
    }
  }
}

impl AppConfig {
  /// Defaults with the in-memory backend, which needs no database.
  pub fn in_memory() -> Self {
    Self {
      store_backend: StoreBackend::Memory,
      ..Self::default()
    }
  }

  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // a missing .env is fine
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from an arbitrary variable source.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let defaults = Self::default();
    let server_host = lookup("SERVER_HOST").unwrap_or(defaults.server_host);
    let server_port = parse_var(&lookup, "SERVER_PORT", defaults.server_port)?;
    let store_backend = parse_var(&lookup, "STORE_BACKEND", defaults.store_backend)?;
    let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
    let db_max_connections = parse_var(&lookup, "DB_MAX_CONNECTIONS", defaults.db_max_connections)?;
    let seed_db = parse_var(&lookup, "SEED_DB", defaults.seed_db)?;

    if store_backend == StoreBackend::Postgres && database_url.is_none() {
      return Err(AppError::Config(
        "Missing environment variable 'DATABASE_URL' (required when STORE_BACKEND=postgres)".to_string(),
      ));
    }
    if db_max_connections == 0 {
      return Err(AppError::Config("DB_MAX_CONNECTIONS must be at least 1".to_string()));
    }

    tracing::info!(backend = ?store_backend, "Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      store_backend,
      database_url,
      db_max_connections,
      seed_db,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
  F: Fn(&str) -> Option<String>,
  T: FromStr,
  T::Err: std::fmt::Display,
{
  match lookup(name) {
    None => Ok(default),
    Some(raw) => raw
      .trim()
      .parse::<T>()
      .map_err(|e| AppError::Config(format!("Invalid {} value '{}': {}", name, raw, e))),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name: &str| vars.get(name).cloned()
  }

  #[test]
  fn memory_backend_needs_no_database_url() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("STORE_BACKEND", "memory"), ("SERVER_PORT", "9000")])).unwrap();
    assert_eq!(cfg.store_backend, StoreBackend::Memory);
    assert_eq!(cfg.bind_address(), "127.0.0.1:9000");
    assert!(!cfg.seed_db);
  }

  #[test]
  fn postgres_backend_requires_database_url() {
    let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert!(matches!(err, AppError::Config(ref m) if m.contains("DATABASE_URL")));

    let cfg = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/shop")])).unwrap();
    assert_eq!(cfg.store_backend, StoreBackend::Postgres);
    assert_eq!(cfg.db_max_connections, 10);
  }

  #[test]
  fn unset_variables_fall_back_to_the_defaults() {
    let defaults = AppConfig::default();
    let cfg = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/shop")])).unwrap();
    assert_eq!(cfg.store_backend, defaults.store_backend);
    assert_eq!(cfg.bind_address(), defaults.bind_address());
    assert_eq!(cfg.db_max_connections, defaults.db_max_connections);
    assert_eq!(cfg.seed_db, defaults.seed_db);

    let memory = AppConfig::from_lookup(lookup_from(&[("STORE_BACKEND", "memory")])).unwrap();
    let expected = AppConfig::in_memory();
    assert_eq!(memory.store_backend, expected.store_backend);
    assert_eq!(memory.bind_address(), expected.bind_address());
    assert_eq!(memory.database_url, expected.database_url);
  }

  #[test]
  fn rejects_malformed_values() {
    assert!(AppConfig::from_lookup(lookup_from(&[("STORE_BACKEND", "memory"), ("SERVER_PORT", "http")])).is_err());
    assert!(AppConfig::from_lookup(lookup_from(&[("STORE_BACKEND", "mongo")])).is_err());
    assert!(AppConfig::from_lookup(lookup_from(&[("STORE_BACKEND", "memory"), ("SEED_DB", "maybe")])).is_err());
  }
}
