//! Orders: immutable checkout snapshots with one mutable status field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::cart::CartLine;
use crate::model::user::UserProfile;
use crate::types::{DeliveryMethod, OrderId, OrderStatus, PaymentMethod, Price};

/// Where and to whom an order ships. Copied from the profile at submit time
/// (possibly with per-order overrides), never referenced live.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryDetails {
    /// Recipient name.
    pub name: String,
    /// Recipient phone number.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// City or regency.
    pub city: String,
    /// Postal code.
    pub postal_code: String,
}

impl DeliveryDetails {
    /// Copy the delivery fields out of a profile.
    #[must_use]
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            phone: profile.phone.clone(),
            address: profile.address.clone(),
            city: profile.city.clone(),
            postal_code: profile.postal_code.clone(),
        }
    }

    /// Names of the fields that are still empty.
    ///
    /// Checkout refuses to proceed while this is non-empty; the caller uses
    /// the names to tell the customer what to fill in.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.phone.trim().is_empty() {
            missing.push("phone");
        }
        if self.address.trim().is_empty() {
            missing.push("address");
        }
        if self.city.trim().is_empty() {
            missing.push("city");
        }
        if self.postal_code.trim().is_empty() {
            missing.push("postal_code");
        }
        missing
    }
}

/// An immutable snapshot of a completed checkout.
///
/// Everything except [`Order::status`] is frozen at creation; the status is
/// the one field the admin registry may move, and only along the
/// [`OrderStatus`] pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// The purchased lines, copied from the cart.
    pub items: Vec<CartLine>,
    /// Delivery address snapshot.
    pub delivery: DeliveryDetails,
    /// Chosen delivery tier.
    pub delivery_method: DeliveryMethod,
    /// Chosen payment method.
    pub payment_method: PaymentMethod,
    /// Free-form notes to the kitchen or courier.
    pub notes: String,
    /// Sum of line totals at submit time.
    pub subtotal: Price,
    /// 10% of the subtotal.
    pub tax: Price,
    /// Flat fee for the delivery tier.
    pub shipping: Price,
    /// `subtotal + tax + shipping`.
    pub total: Price,
    /// Client-clock creation time.
    pub created_at: DateTime<Utc>,
    /// Fulfillment status, admin-mutable.
    pub status: OrderStatus,
}

impl Order {
    /// Short order number for receipts, e.g. `#a1b2c3`.
    #[must_use]
    pub fn short_id(&self) -> &str {
        self.id.short()
    }

    /// Whether any line refers to `product_id`.
    #[must_use]
    pub fn contains_product(&self, product_id: &crate::types::ProductId) -> bool {
        self.items.iter().any(|l| l.product_id == *product_id)
    }
}
