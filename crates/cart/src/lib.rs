//! RocketShoes cart state container.
//!
//! Owns the current set of selected products, validates quantity changes
//! against the remote stock endpoint, and persists the cart to a durable
//! client-side key-value store after every mutation.
//!
//! # Architecture
//!
//! [`store::CartStore`] is the single component; it is explicitly constructed
//! and handed to whichever UI layer needs it (no ambient singletons). Its
//! collaborators are ports:
//!
//! - [`catalog::ProductCatalogClient`] - read-only product metadata and stock
//! - [`storage::PersistentKeyValueStore`] - durable cart snapshot storage
//! - [`notify::NotificationSink`] - fire-and-forget user-visible messages
//!
//! Operation failures never propagate to the caller; they surface only as
//! notifications, so the UI observes nothing beyond "the cart did or did not
//! change".
//!
//! # Example
//!
//! ```rust,ignore
//! use rocket_shoes_cart::{CartStore, CatalogConfig, HttpCatalogClient, JsonFileStore, TracingSink};
//! use rocket_shoes_core::ProductId;
//!
//! let config = CatalogConfig::from_env()?;
//! let catalog = HttpCatalogClient::new(&config)?;
//! let storage = JsonFileStore::new("/var/lib/rocketshoes")?;
//! let mut cart = CartStore::open(catalog, storage, TracingSink)?;
//!
//! cart.add_product(ProductId::new(1)).await;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod notify;
pub mod storage;
pub mod store;

pub use catalog::{CatalogError, HttpCatalogClient, ProductCatalogClient};
pub use config::{CatalogConfig, ConfigError};
pub use error::CartError;
pub use notify::{NotificationSink, Severity, TracingSink};
pub use storage::{
    CART_STORAGE_KEY, JsonFileStore, MemoryStore, PersistentKeyValueStore, StorageError,
};
pub use store::CartStore;
