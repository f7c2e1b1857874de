//! RocketShoes Core - Shared types library.
//!
//! This crate provides the domain types used across the RocketShoes cart
//! components:
//! - `cart` - Cart state container and its collaborator ports
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices, plus the
//!   cart and catalog data model

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
