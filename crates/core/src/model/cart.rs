//! The cart aggregate.
//!
//! A cart is an ordered list of lines, at most one per product. Lines hold a
//! denormalized copy of the product fields taken at add time, so later
//! catalog edits never alter what a customer already put in their basket.

use serde::{Deserialize, Serialize};

use crate::model::product::Product;
use crate::types::{Price, ProductId};

/// One product in the cart, with quantity.
///
/// Invariant: `quantity >= 1`. A line whose quantity would drop to zero is
/// removed from the cart, never retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product this line refers to.
    pub product_id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Unit price at add time.
    pub unit_price: Price,
    /// Menu section at add time.
    pub category: String,
    /// Image reference at add time.
    pub image: String,
    /// How many, always at least one.
    pub quantity: u32,
}

impl CartLine {
    fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            category: product.category.clone(),
            image: product.image.clone(),
            quantity,
        }
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// The mutable collection of selected-but-unpurchased items for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Add `quantity` of `product`.
    ///
    /// If a line for the product already exists its quantity is incremented;
    /// otherwise a new line is appended. Adding zero is a no-op.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine::from_product(product, quantity));
        }
    }

    /// Set the quantity of an existing line; zero removes the line.
    ///
    /// Unknown product IDs are ignored. Update-then-prune, matching the
    /// three-state transition the storefront UI drives: bump, set, remove.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        for line in &mut self.lines {
            if line.product_id == *product_id {
                line.quantity = quantity;
            }
        }
        self.lines.retain(|l| l.quantity > 0);
    }

    /// Remove the line for `product_id`, if present.
    pub fn remove(&mut self, product_id: &ProductId) {
        self.lines.retain(|l| l.product_id != *product_id);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for `product_id`, if present.
    #[must_use]
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == *product_id)
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `unit_price * quantity` over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total number of items across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::product::seed_menu;

    fn product(id: &str) -> Product {
        seed_menu()
            .into_iter()
            .find(|p| p.id.as_str() == id)
            .unwrap()
    }

    #[test]
    fn test_add_merges_by_product_id() {
        let geprek = product("ayam-geprek-original");
        let mut cart = Cart::default();
        cart.add(&geprek, 2);
        cart.add(&geprek, 3);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line(&geprek.id).unwrap().quantity, 5);
    }

    #[test]
    fn test_add_zero_is_noop() {
        let mut cart = Cart::default();
        cart.add(&product("es-teh-manis"), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::default();
        cart.add(&product("soto-ayam"), 1);
        cart.add(&product("es-teh-manis"), 1);
        cart.add(&product("soto-ayam"), 1);

        let ids: Vec<_> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, ["soto-ayam", "es-teh-manis"]);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mie = product("mie-ayam-original");
        let mut cart = Cart::default();
        cart.add(&mie, 2);
        cart.set_quantity(&mie.id, 0);

        assert!(cart.is_empty());
        assert!(cart.line(&mie.id).is_none());
    }

    #[test]
    fn test_set_quantity_unknown_id_is_ignored() {
        let mut cart = Cart::default();
        cart.add(&product("soto-ayam"), 1);
        cart.set_quantity(&ProductId::new("tidak-ada"), 7);

        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_no_line_ever_has_zero_quantity() {
        let mie = product("mie-ayam-original");
        let bakso = product("bakso-goreng");
        let mut cart = Cart::default();
        cart.add(&mie, 1);
        cart.add(&bakso, 4);
        cart.set_quantity(&mie.id, 0);
        cart.set_quantity(&bakso.id, 2);

        assert!(cart.lines().iter().all(|l| l.quantity >= 1));
    }

    #[test]
    fn test_subtotal_matches_recomputation() {
        let mut cart = Cart::default();
        cart.add(&product("ayam-geprek-keju"), 2); // 2 x 20.000
        cart.add(&product("es-rencengan-spesial"), 3); // 3 x 10.000
        cart.remove(&ProductId::new("tidak-ada"));
        cart.set_quantity(&ProductId::new("es-rencengan-spesial"), 1);

        let expected: Price = cart.lines().iter().map(CartLine::line_total).sum();
        assert_eq!(cart.subtotal(), expected);
        assert_eq!(cart.subtotal(), Price::from_rupiah(50_000));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_line_snapshot_survives_catalog_change() {
        let mut geprek = product("ayam-geprek-original");
        let mut cart = Cart::default();
        cart.add(&geprek, 1);

        // catalog edit after the fact
        geprek.price = Price::from_rupiah(99_000);

        assert_eq!(
            cart.line(&geprek.id).unwrap().unit_price,
            Price::from_rupiah(15_000)
        );
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::default();
        cart.add(&product("soto-ayam"), 2);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Price::ZERO);
    }
}
