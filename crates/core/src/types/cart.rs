//! Cart and catalog data model.
//!
//! These types mirror the shapes exchanged with the product catalog API and
//! the persisted cart snapshot.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// One product entry in the cart with its selected quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Product identifier, unique within the cart.
    pub id: ProductId,
    /// Product title from the catalog.
    pub title: String,
    /// Product image URL from the catalog.
    pub image: String,
    /// Unit price from the catalog.
    pub price: Price,
    /// Selected quantity, always at least 1.
    pub amount: u32,
}

/// An ordered sequence of line items, unique by product id.
///
/// Uniqueness is maintained by the find-or-append mutation logic in the cart
/// store, not by the container itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Number of line items (not total quantity).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find a line item by product id.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Find a line item by product id, mutably.
    pub fn find_mut(&mut self, id: ProductId) -> Option<&mut CartLineItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Position of a line item by product id.
    #[must_use]
    pub fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Append a line item at the end of the sequence.
    pub fn push(&mut self, item: CartLineItem) {
        self.items.push(item);
    }

    /// Remove the line item at `index`, preserving the order of the rest.
    pub fn remove(&mut self, index: usize) -> CartLineItem {
        self.items.remove(index)
    }
}

impl FromIterator<CartLineItem> for Cart {
    fn from_iter<T: IntoIterator<Item = CartLineItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Remote-authoritative available quantity for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    /// Units available for sale.
    pub amount: u32,
}

/// Product metadata as returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogProduct {
    /// Product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: Price,
    /// Image URL.
    pub image: String,
}
