// storefront/src/services/mod.rs

pub mod cart_service;
pub mod product_service;
