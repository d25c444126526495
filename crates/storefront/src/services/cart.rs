//! Cart persistence service.
//!
//! The aggregate logic lives on [`warung_core::Cart`]; this service is the
//! load-mutate-persist shell around it. Every mutation writes the store
//! before returning, so the persisted cart is never behind the one the
//! caller sees.

use tracing::debug;

use warung_core::{Cart, Product, ProductId};
use warung_storage::{KvStore, StoreError, keys};

/// Service for reading and mutating the session's cart.
pub struct CartService<'a> {
    store: &'a KvStore,
}

impl<'a> CartService<'a> {
    /// Create the service.
    #[must_use]
    pub const fn new(store: &'a KvStore) -> Self {
        Self { store }
    }

    /// The current cart; empty if nothing is persisted.
    #[must_use]
    pub fn cart(&self) -> Cart {
        self.store.get_or_default(keys::CART)
    }

    /// Add `quantity` of `product` and persist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails.
    pub fn add(&self, product: &Product, quantity: u32) -> Result<Cart, StoreError> {
        let mut cart = self.cart();
        cart.add(product, quantity);
        self.persist(&cart)?;
        debug!(product = %product.id, quantity, "added to cart");
        Ok(cart)
    }

    /// Set the quantity of a line (zero removes it) and persist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails.
    pub fn set_quantity(&self, product_id: &ProductId, quantity: u32) -> Result<Cart, StoreError> {
        let mut cart = self.cart();
        cart.set_quantity(product_id, quantity);
        self.persist(&cart)?;
        Ok(cart)
    }

    /// Remove a line and persist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails.
    pub fn remove(&self, product_id: &ProductId) -> Result<Cart, StoreError> {
        let mut cart = self.cart();
        cart.remove(product_id);
        self.persist(&cart)?;
        Ok(cart)
    }

    /// Empty the cart and persist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails.
    pub fn clear(&self) -> Result<Cart, StoreError> {
        let cart = Cart::default();
        self.persist(&cart)?;
        Ok(cart)
    }

    fn persist(&self, cart: &Cart) -> Result<(), StoreError> {
        self.store.set(keys::CART, cart)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use warung_core::seed_menu;

    fn store() -> (TempDir, KvStore) {
        let dir = TempDir::new().unwrap();
        let store = KvStore::open(dir.path()).unwrap();
        (dir, store)
    }

    fn product(id: &str) -> Product {
        seed_menu()
            .into_iter()
            .find(|p| p.id.as_str() == id)
            .unwrap()
    }

    #[test]
    fn test_mutations_are_persisted_immediately() {
        let (_dir, store) = store();
        let service = CartService::new(&store);

        service.add(&product("soto-ayam"), 2).unwrap();

        // A fresh service over the same store sees the mutation.
        let reloaded = CartService::new(&store).cart();
        assert_eq!(reloaded.item_count(), 2);
    }

    #[test]
    fn test_set_quantity_zero_persists_removal() {
        let (_dir, store) = store();
        let service = CartService::new(&store);
        let soto = product("soto-ayam");

        service.add(&soto, 2).unwrap();
        service.set_quantity(&soto.id, 0).unwrap();

        assert!(service.cart().is_empty());
    }

    #[test]
    fn test_clear_persists_empty_cart() {
        let (_dir, store) = store();
        let service = CartService::new(&store);

        service.add(&product("soto-ayam"), 1).unwrap();
        service.add(&product("es-teh-manis"), 3).unwrap();
        service.clear().unwrap();

        assert!(CartService::new(&store).cart().is_empty());
    }

    #[test]
    fn test_empty_cart_when_store_is_fresh() {
        let (_dir, store) = store();
        assert!(CartService::new(&store).cart().is_empty());
    }
}
