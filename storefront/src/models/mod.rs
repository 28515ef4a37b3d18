// storefront/src/models/mod.rs

//! Contains data structures representing stored records.

pub mod cart_item;
pub mod product;

// Re-export the model structs for convenient access
pub use cart_item::{CartItem, NewCartItem, Quantity};
pub use product::{NewProduct, Product};
