//! Unified error type for cart operations.
//!
//! Failures are terminal at the operation boundary: `CartStore` converts
//! every `CartError` into a generic user notification and a log event, and
//! never propagates it to the caller.

use thiserror::Error;

use rocket_shoes_core::ProductId;

use crate::catalog::CatalogError;
use crate::storage::StorageError;

/// Everything that can go wrong inside a cart operation.
#[derive(Debug, Error)]
pub enum CartError {
    /// Catalog API lookup failed.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Persisting the cart snapshot failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Requested or prospective amount exceeds available stock.
    #[error("requested amount {requested} exceeds stock of {available}")]
    StockExceeded {
        /// Amount the guard checked.
        requested: u32,
        /// Units the catalog reports as available.
        available: u32,
    },

    /// Product is not in the cart (remove path only).
    #[error("product {0} is not in the cart")]
    ItemNotFound(ProductId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_error_display() {
        let err = CartError::StockExceeded {
            requested: 3,
            available: 2,
        };
        assert_eq!(err.to_string(), "requested amount 3 exceeds stock of 2");

        let err = CartError::ItemNotFound(ProductId::new(7));
        assert_eq!(err.to_string(), "product 7 is not in the cart");
    }
}
