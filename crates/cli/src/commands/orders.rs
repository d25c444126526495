//! Order listing commands (customer view).

use tracing::info;

use warung_core::{Order, OrderId};
use warung_storefront::services::CheckoutService;

pub(crate) fn print_order(order: &Order) {
    info!(
        "Order #{} - {} - {}",
        order.short_id(),
        order.created_at.format("%Y-%m-%d %H:%M"),
        order.status
    );
    info!("  Recipient: {} ({})", order.delivery.name, order.delivery.phone);
    info!(
        "  Address: {}, {} {}",
        order.delivery.address, order.delivery.city, order.delivery.postal_code
    );
    for line in &order.items {
        info!(
            "  {:<28} x{:<3} {:>12}",
            line.name,
            line.quantity,
            line.line_total().to_string()
        );
    }
    info!("  Subtotal: {}", order.subtotal);
    info!("  Tax (10%): {}", order.tax);
    info!("  Shipping ({}): {}", order.delivery_method, order.shipping);
    info!("  Total: {} via {}", order.total, order.payment_method.label());
    if !order.notes.is_empty() {
        info!("  Notes: {}", order.notes);
    }
}

/// List all orders, newest first.
///
/// # Errors
///
/// Returns an error if the store cannot be opened.
pub fn list() -> Result<(), Box<dyn std::error::Error>> {
    let state = super::storefront()?;
    let mut orders = CheckoutService::new(state.store()).orders();
    if orders.is_empty() {
        info!("No orders yet");
        return Ok(());
    }
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    for order in orders {
        info!(
            "#{}  {}  {:<10}  {}",
            order.short_id(),
            order.created_at.format("%Y-%m-%d"),
            order.status.to_string(),
            order.total
        );
    }
    Ok(())
}

/// Show one order in full.
///
/// # Errors
///
/// Returns an error for an unknown order ID.
pub fn show(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let state = super::storefront()?;
    let order = CheckoutService::new(state.store())
        .order(&OrderId::new(id))
        .ok_or_else(|| format!("no order with id {id}"))?;
    print_order(&order);
    Ok(())
}

/// Show the most recent order.
///
/// # Errors
///
/// Returns an error if no order has been placed yet.
pub fn latest() -> Result<(), Box<dyn std::error::Error>> {
    let state = super::storefront()?;
    let order = CheckoutService::new(state.store())
        .latest_order()
        .ok_or("no order has been placed yet")?;
    print_order(&order);
    Ok(())
}
