//! Cart commands.

use tracing::info;

use warung_core::{Cart, ProductId};
use warung_storefront::services::{CartService, CatalogService};

fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        info!("Cart is empty");
        return;
    }
    for line in cart.lines() {
        info!(
            "{:<28} x{:<3} {:>12}",
            line.product_id.to_string(),
            line.quantity,
            line.line_total().to_string()
        );
    }
    info!(
        "Subtotal: {} ({} items)",
        cart.subtotal(),
        cart.item_count()
    );
}

/// Show the cart.
///
/// # Errors
///
/// Returns an error if the store cannot be opened.
pub fn show() -> Result<(), Box<dyn std::error::Error>> {
    let state = super::storefront()?;
    print_cart(&CartService::new(state.store()).cart());
    Ok(())
}

/// Add a product to the cart.
///
/// # Errors
///
/// Returns an error for an unknown product ID or a failed write.
pub fn add(product_id: &str, quantity: u32) -> Result<(), Box<dyn std::error::Error>> {
    let state = super::storefront()?;
    let id = ProductId::new(product_id);

    let Some(product) = CatalogService::new(state.store()).product(&id) else {
        return Err(format!("no product with id {id}, see `warung menu`").into());
    };

    let cart = CartService::new(state.store()).add(&product, quantity)?;
    info!("Added {} x{quantity}", product.name);
    print_cart(&cart);
    Ok(())
}

/// Set a line's quantity; zero removes the line.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn set_quantity(product_id: &str, quantity: u32) -> Result<(), Box<dyn std::error::Error>> {
    let state = super::storefront()?;
    let cart =
        CartService::new(state.store()).set_quantity(&ProductId::new(product_id), quantity)?;
    print_cart(&cart);
    Ok(())
}

/// Remove a line.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn remove(product_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let state = super::storefront()?;
    let cart = CartService::new(state.store()).remove(&ProductId::new(product_id))?;
    print_cart(&cart);
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn clear() -> Result<(), Box<dyn std::error::Error>> {
    let state = super::storefront()?;
    CartService::new(state.store()).clear()?;
    info!("Cart cleared");
    Ok(())
}
