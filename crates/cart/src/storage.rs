//! Durable key-value storage for the cart snapshot.
//!
//! The cart is persisted as a full JSON overwrite under a fixed namespaced
//! key after every successful mutation. Stored state is decoded through a
//! validating decoder rather than trusted blindly: malformed snapshots are
//! rejected at load time.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use rocket_shoes_core::Cart;

/// Fixed namespaced key identifying the cart snapshot.
pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";

/// Errors that can occur reading or writing persisted state.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored value is not valid JSON for the expected shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Stored value parsed but violates a cart invariant.
    #[error("invalid stored cart: {0}")]
    InvalidState(String),
}

/// Durable storage of string values across process restarts.
///
/// `get` returns `None` for an absent key; `set` is a full overwrite.
pub trait PersistentKeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Serialize a cart for storage.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn encode_cart(cart: &Cart) -> Result<String, StorageError> {
    Ok(serde_json::to_string(cart)?)
}

/// Deserialize and validate a stored cart snapshot.
///
/// Rejects snapshots that parse but violate cart invariants: zero-amount
/// line items, duplicate product ids, or empty titles.
///
/// # Errors
///
/// Returns an error if the snapshot is not valid JSON or fails validation.
pub fn decode_cart(raw: &str) -> Result<Cart, StorageError> {
    let cart: Cart = serde_json::from_str(raw)?;

    let mut seen = HashSet::new();
    for item in cart.items() {
        if item.amount == 0 {
            return Err(StorageError::InvalidState(format!(
                "line item {} has amount 0",
                item.id
            )));
        }
        if item.title.is_empty() {
            return Err(StorageError::InvalidState(format!(
                "line item {} has an empty title",
                item.id
            )));
        }
        if !seen.insert(item.id) {
            return Err(StorageError::InvalidState(format!(
                "duplicate line item for product {}",
                item.id
            )));
        }
    }

    Ok(cart)
}

// =============================================================================
// JsonFileStore
// =============================================================================

/// File-backed key-value store, one file per key under a base directory.
///
/// Stands in for browser `localStorage`: session-durable, single writer,
/// whole-value overwrites.
#[derive(Debug)]
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `base_dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Map a key to a file path.
    ///
    /// Keys may contain characters that are not filename-safe (the cart key
    /// carries `@` and `:`), so everything outside `[A-Za-z0-9._-]` is
    /// replaced before use.
    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        self.base_dir.join(format!("{name}.json"))
    }

    /// The directory this store writes into.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl PersistentKeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

// =============================================================================
// MemoryStore
// =============================================================================

/// In-memory key-value store for tests and ephemeral sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistentKeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
