//! Checkout: turning a cart into an immutable order.
//!
//! Submission is one synchronous pass: validate the preconditions, compute
//! the money lines, write the order, clear the cart. There is no rollback
//! machinery because nothing can interleave - both writes happen before the
//! call returns or the flow is refused before either occurs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::info;

use warung_core::{
    Cart, DeliveryDetails, DeliveryMethod, Order, OrderId, OrderStatus, PaymentMethod, Price,
};
use warung_storage::{KvStore, StoreError, keys};

use super::auth::AuthService;
use super::cart::CartService;

/// Tax rate applied to every order: 10% of the subtotal.
fn tax_rate() -> Decimal {
    Decimal::new(1, 1)
}

/// Errors that refuse a checkout.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    /// Nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// The session is not signed in.
    #[error("checkout requires a signed-in session")]
    NotAuthenticated,

    /// Delivery details are incomplete; the customer is sent back to
    /// complete their profile.
    #[error("delivery details incomplete: missing {}", missing.join(", "))]
    IncompleteDelivery {
        /// Names of the empty fields.
        missing: Vec<&'static str>,
    },

    /// Store write failed.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

/// Everything the customer chose on the checkout page.
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    /// Where to deliver; usually copied from the profile, possibly edited.
    pub delivery: DeliveryDetails,
    /// Delivery tier.
    pub delivery_method: DeliveryMethod,
    /// How the customer will pay.
    pub payment_method: PaymentMethod,
    /// Notes to the kitchen or courier.
    pub notes: String,
}

/// Service that builds and persists orders.
pub struct CheckoutService<'a> {
    store: &'a KvStore,
}

impl<'a> CheckoutService<'a> {
    /// Create the service.
    #[must_use]
    pub const fn new(store: &'a KvStore) -> Self {
        Self { store }
    }

    /// Submit a checkout.
    ///
    /// Preconditions, checked in order: non-empty cart, signed-in session,
    /// complete delivery details. On success the order is appended to the
    /// registry, recorded as the latest order, and the cart is cleared.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`] naming the failed precondition; the cart
    /// and the order list are untouched in every error case.
    pub fn submit(&self, request: CheckoutRequest) -> Result<Order, CheckoutError> {
        let cart_service = CartService::new(self.store);
        let cart = cart_service.cart();
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let session = AuthService::new(self.store).session();
        if session.require_user().is_err() {
            return Err(CheckoutError::NotAuthenticated);
        }

        let missing = request.delivery.missing_fields();
        if !missing.is_empty() {
            return Err(CheckoutError::IncompleteDelivery { missing });
        }

        let order = build_order(&cart, request, Utc::now());

        let mut orders: Vec<Order> = self.store.get_or_default(keys::ORDERS);
        orders.push(order.clone());
        self.store.set(keys::ORDERS, &orders)?;
        self.store.set(keys::LATEST_ORDER, &order)?;
        cart_service.clear()?;

        info!(order = %order.id, total = %order.total, "order placed");
        Ok(order)
    }

    /// The most recently placed order, for the post-checkout summary.
    #[must_use]
    pub fn latest_order(&self) -> Option<Order> {
        self.store.get(keys::LATEST_ORDER)
    }

    /// All orders, oldest first.
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        self.store.get_or_default(keys::ORDERS)
    }

    /// One order by ID.
    #[must_use]
    pub fn order(&self, id: &OrderId) -> Option<Order> {
        self.orders().into_iter().find(|o| o.id == *id)
    }
}

/// Freeze a cart and checkout selections into an order.
///
/// `total = subtotal + subtotal * 10% + fee(delivery_method)`, computed in
/// decimal arithmetic so the equality is exact.
fn build_order(cart: &Cart, request: CheckoutRequest, now: DateTime<Utc>) -> Order {
    let subtotal = cart.subtotal();
    let tax = Price::new(subtotal.amount() * tax_rate());
    let shipping = request.delivery_method.fee();
    let total = subtotal + tax + shipping;

    Order {
        id: OrderId::generate(),
        items: cart.lines().to_vec(),
        delivery: request.delivery,
        delivery_method: request.delivery_method,
        payment_method: request.payment_method,
        notes: request.notes,
        subtotal,
        tax,
        shipping,
        total,
        created_at: now,
        status: OrderStatus::Diproses,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use warung_core::{Password, seed_menu};

    use crate::services::auth::Registration;

    fn store() -> (TempDir, KvStore) {
        let dir = TempDir::new().unwrap();
        let store = KvStore::open(dir.path()).unwrap();
        (dir, store)
    }

    fn sign_in(store: &KvStore) {
        AuthService::new(store)
            .register(Registration {
                name: "Budi Santoso".to_owned(),
                email: "budi@example.com".to_owned(),
                password: Password::new("rahasia-enam"),
                confirm: Password::new("rahasia-enam"),
            })
            .unwrap();
    }

    fn fill_cart(store: &KvStore) {
        let menu = seed_menu();
        let cart = CartService::new(store);
        // 2 x 15.000 + 1 x 12.000 = 42.000
        let geprek = menu
            .iter()
            .find(|p| p.id.as_str() == "ayam-geprek-original")
            .unwrap();
        let mie = menu
            .iter()
            .find(|p| p.id.as_str() == "mie-ayam-original")
            .unwrap();
        cart.add(geprek, 2).unwrap();
        cart.add(mie, 1).unwrap();
    }

    fn request() -> CheckoutRequest {
        CheckoutRequest {
            delivery: DeliveryDetails {
                name: "Budi Santoso".to_owned(),
                phone: "+62 812 3456 7890".to_owned(),
                address: "Jl. Pendidikan No. 123".to_owned(),
                city: "Kota Pendidikan".to_owned(),
                postal_code: "12345".to_owned(),
            },
            delivery_method: DeliveryMethod::Regular,
            payment_method: PaymentMethod::BankTransferBca,
            notes: String::new(),
        }
    }

    #[test]
    fn test_refused_when_cart_empty() {
        let (_dir, store) = store();
        sign_in(&store);

        let err = CheckoutService::new(&store).submit(request()).unwrap_err();
        assert!(matches!(err, CheckoutError::EmptyCart));
        assert!(CheckoutService::new(&store).orders().is_empty());
    }

    #[test]
    fn test_refused_when_not_signed_in() {
        let (_dir, store) = store();
        fill_cart(&store);

        let err = CheckoutService::new(&store).submit(request()).unwrap_err();
        assert!(matches!(err, CheckoutError::NotAuthenticated));

        // cart untouched
        assert_eq!(CartService::new(&store).cart().item_count(), 3);
        assert!(CheckoutService::new(&store).orders().is_empty());
    }

    #[test]
    fn test_refused_when_delivery_incomplete() {
        let (_dir, store) = store();
        sign_in(&store);
        fill_cart(&store);

        let mut incomplete = request();
        incomplete.delivery.phone = String::new();
        incomplete.delivery.city = String::new();

        let err = CheckoutService::new(&store).submit(incomplete).unwrap_err();
        match err {
            CheckoutError::IncompleteDelivery { missing } => {
                assert_eq!(missing, vec!["phone", "city"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(CartService::new(&store).cart().item_count(), 3);
    }

    #[test]
    fn test_totals_regular_delivery() {
        let (_dir, store) = store();
        sign_in(&store);
        fill_cart(&store);

        let order = CheckoutService::new(&store).submit(request()).unwrap();

        assert_eq!(order.subtotal, Price::from_rupiah(42_000));
        assert_eq!(order.tax, Price::from_rupiah(4_200));
        assert_eq!(order.shipping, Price::from_rupiah(5_000));
        assert_eq!(order.total, Price::from_rupiah(51_200));
        assert_eq!(order.total, order.subtotal + order.tax + order.shipping);
    }

    #[test]
    fn test_totals_express_delivery() {
        let (_dir, store) = store();
        sign_in(&store);
        fill_cart(&store);

        let mut express = request();
        express.delivery_method = DeliveryMethod::Express;
        let order = CheckoutService::new(&store).submit(express).unwrap();

        assert_eq!(order.shipping, Price::from_rupiah(15_000));
        assert_eq!(order.total, Price::from_rupiah(61_200));
    }

    #[test]
    fn test_success_clears_cart_and_registers_order() {
        let (_dir, store) = store();
        sign_in(&store);
        fill_cart(&store);

        let checkout = CheckoutService::new(&store);
        let order = checkout.submit(request()).unwrap();

        assert!(CartService::new(&store).cart().is_empty());
        assert_eq!(order.status, OrderStatus::Diproses);

        let orders = checkout.orders();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders.first().unwrap().id, order.id);
        assert_eq!(checkout.latest_order().unwrap().id, order.id);
    }

    #[test]
    fn test_order_is_a_snapshot_of_the_cart() {
        let (_dir, store) = store();
        sign_in(&store);
        fill_cart(&store);

        let order = CheckoutService::new(&store).submit(request()).unwrap();
        assert_eq!(order.items.len(), 2);

        // New cart activity after checkout must not touch the order.
        let menu = seed_menu();
        CartService::new(&store)
            .add(menu.first().unwrap(), 5)
            .unwrap();
        let stored = CheckoutService::new(&store).latest_order().unwrap();
        assert_eq!(stored.items.len(), 2);
    }
}
