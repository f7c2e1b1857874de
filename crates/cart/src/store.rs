//! Cart state container.
//!
//! `CartStore` owns the line-item sequence, validates quantity changes
//! against the remote stock endpoint, and persists the full cart snapshot
//! after every successful mutation.
//!
//! Operations never return errors: every failure is converted at the
//! boundary into a generic localized notification, so the UI can only
//! observe whether the cart changed. Mutations go through a working copy
//! that is committed in memory only after the snapshot write succeeds, so a
//! failed persist leaves no partial state behind.

use tracing::{debug, instrument, warn};

use rocket_shoes_core::{Cart, CartLineItem, ProductId};

use crate::catalog::ProductCatalogClient;
use crate::error::CartError;
use crate::notify::{NotificationSink, messages};
use crate::storage::{self, CART_STORAGE_KEY, PersistentKeyValueStore, StorageError};

/// The cart state container.
///
/// Construct one per session and hand it to the UI layer by reference;
/// mutation goes through `&mut self`, which serializes operations at the
/// type level.
pub struct CartStore<C, S, N> {
    catalog: C,
    storage: S,
    notifications: N,
    cart: Cart,
}

impl<C, S, N> CartStore<C, S, N>
where
    C: ProductCatalogClient,
    S: PersistentKeyValueStore,
    N: NotificationSink,
{
    /// Open the store, loading any persisted cart snapshot.
    ///
    /// An absent snapshot yields an empty cart; a malformed one is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or fails validation.
    pub fn open(catalog: C, storage: S, notifications: N) -> Result<Self, StorageError> {
        let cart = match storage.get(CART_STORAGE_KEY)? {
            Some(raw) => {
                let cart = storage::decode_cart(&raw)?;
                debug!(items = cart.len(), "loaded persisted cart");
                cart
            }
            None => {
                debug!("no persisted cart, starting empty");
                Cart::new()
            }
        };

        Ok(Self {
            catalog,
            storage,
            notifications,
            cart,
        })
    }

    /// The current line-item sequence.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add a product to the cart, or increment its amount if present.
    ///
    /// The stock guard checks the prospective amount `existing + 1` when the
    /// item is already in the cart, and `0` when it is not, so a first-time
    /// addition is never blocked by stock (even at stock 0). New items are
    /// appended with amount 1 using metadata fetched from the catalog.
    #[instrument(skip(self))]
    pub async fn add_product(&mut self, product_id: ProductId) {
        match self.try_add(product_id).await {
            Ok(()) => {}
            Err(err @ CartError::StockExceeded { .. }) => {
                warn!(%product_id, %err, "add blocked by stock guard");
                self.notifications.error(messages::OUT_OF_STOCK);
            }
            Err(err) => {
                tracing::error!(%product_id, %err, "failed to add product");
                self.notifications.error(messages::ADD_FAILED);
            }
        }
    }

    /// Remove a product's line item from the cart entirely.
    ///
    /// Removing an id that is not in the cart is an error, surfaced through
    /// the same generic notification channel as internal failures.
    #[instrument(skip(self))]
    pub fn remove_product(&mut self, product_id: ProductId) {
        match self.try_remove(product_id) {
            Ok(()) => {}
            Err(err) => {
                tracing::error!(%product_id, %err, "failed to remove product");
                self.notifications.error(messages::REMOVE_FAILED);
            }
        }
    }

    /// Set a product's amount to an absolute value.
    ///
    /// An amount of 0 is a complete silent no-op. An id that is not in the
    /// cart silently succeeds without creating a line item; products enter
    /// the cart only through [`Self::add_product`].
    #[instrument(skip(self))]
    pub async fn update_product_amount(&mut self, product_id: ProductId, amount: u32) {
        match self.try_update(product_id, amount).await {
            Ok(()) => {}
            Err(err @ CartError::StockExceeded { .. }) => {
                warn!(%product_id, %err, "update blocked by stock guard");
                self.notifications.error(messages::OUT_OF_STOCK);
            }
            Err(err) => {
                tracing::error!(%product_id, %err, "failed to update product amount");
                self.notifications.error(messages::UPDATE_FAILED);
            }
        }
    }

    async fn try_add(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let mut cart = self.cart.clone();

        let stock = self.catalog.fetch_stock(product_id).await?;

        // Prospective amount is 0 for an item not yet in the cart, so the
        // guard never blocks a first-time addition.
        let prospective = cart.find(product_id).map_or(0, |item| item.amount + 1);
        if prospective > stock.amount {
            return Err(CartError::StockExceeded {
                requested: prospective,
                available: stock.amount,
            });
        }

        if let Some(item) = cart.find_mut(product_id) {
            item.amount += 1;
        } else {
            let product = self.catalog.fetch_product(product_id).await?;
            cart.push(CartLineItem {
                id: product_id,
                title: product.title,
                image: product.image,
                price: product.price,
                amount: 1,
            });
        }

        self.commit(cart)
    }

    fn try_remove(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let mut cart = self.cart.clone();

        let index = cart
            .position(product_id)
            .ok_or(CartError::ItemNotFound(product_id))?;
        cart.remove(index);

        self.commit(cart)
    }

    async fn try_update(&mut self, product_id: ProductId, amount: u32) -> Result<(), CartError> {
        // Zero and below never reach the cart: no fetch, no persist, no
        // notification.
        if amount == 0 {
            return Ok(());
        }

        let mut cart = self.cart.clone();

        let stock = self.catalog.fetch_stock(product_id).await?;
        if amount > stock.amount {
            return Err(CartError::StockExceeded {
                requested: amount,
                available: stock.amount,
            });
        }

        if let Some(item) = cart.find_mut(product_id) {
            item.amount = amount;
        }
        // An absent id falls through: the unchanged snapshot is still
        // rewritten, and the operation silently succeeds.

        self.commit(cart)
    }

    /// Persist the working copy, then make it the current cart.
    fn commit(&mut self, cart: Cart) -> Result<(), CartError> {
        let raw = storage::encode_cart(&cart)?;
        self.storage.set(CART_STORAGE_KEY, &raw)?;
        debug!(items = cart.len(), "cart persisted");
        self.cart = cart;
        Ok(())
    }
}
