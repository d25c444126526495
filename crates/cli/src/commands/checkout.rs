//! Checkout command.

use tracing::info;

use warung_core::DeliveryDetails;
use warung_storefront::services::auth::AuthService;
use warung_storefront::services::chat::order_confirmation_message;
use warung_storefront::services::{CheckoutRequest, CheckoutService};

/// Checkout flags as parsed from the command line.
pub struct CheckoutArgs {
    /// Delivery tier name.
    pub delivery: String,
    /// Payment method name.
    pub payment: String,
    /// Order notes.
    pub notes: String,
    /// Recipient name override.
    pub name: Option<String>,
    /// Phone override.
    pub phone: Option<String>,
    /// Address override.
    pub address: Option<String>,
    /// City override.
    pub city: Option<String>,
    /// Postal code override.
    pub postal_code: Option<String>,
}

/// Place an order from the current cart.
///
/// Delivery details default to the signed-in profile; any flag overrides
/// its field for this order only.
///
/// # Errors
///
/// Returns an error if the cart is empty, the session is signed out, the
/// delivery details are incomplete, or a flag fails to parse.
pub fn submit(args: CheckoutArgs) -> Result<(), Box<dyn std::error::Error>> {
    let state = super::storefront()?;
    let store = state.store();

    let session = AuthService::new(store).session();
    let mut delivery = session
        .user
        .as_ref()
        .map(DeliveryDetails::from_profile)
        .unwrap_or_default();
    if let Some(name) = args.name {
        delivery.name = name;
    }
    if let Some(phone) = args.phone {
        delivery.phone = phone;
    }
    if let Some(address) = args.address {
        delivery.address = address;
    }
    if let Some(city) = args.city {
        delivery.city = city;
    }
    if let Some(postal_code) = args.postal_code {
        delivery.postal_code = postal_code;
    }

    let order = CheckoutService::new(store).submit(CheckoutRequest {
        delivery,
        delivery_method: args.delivery.parse()?,
        payment_method: args.payment.parse()?,
        notes: args.notes,
    })?;

    info!("Order #{} placed!", order.short_id());
    info!("  Subtotal: {}", order.subtotal);
    info!("  Tax (10%): {}", order.tax);
    info!("  Shipping ({}): {}", order.delivery_method, order.shipping);
    info!("  Total: {}", order.total);
    info!("  Status: {}", order.status);

    if let Some(number) = &state.config().whatsapp_number {
        info!("Confirm via WhatsApp ({number}):");
        info!(
            "{}",
            order_confirmation_message(&state.config().store_name, &order)
        );
    }
    Ok(())
}
