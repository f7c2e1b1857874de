//! Core types for RocketShoes.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod price;

pub use cart::{Cart, CartLineItem, CatalogProduct, StockRecord};
pub use id::*;
pub use price::Price;
