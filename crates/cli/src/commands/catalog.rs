//! Menu listing.

use tracing::info;

use warung_storefront::services::CatalogService;

/// Print the menu, optionally restricted to one section.
///
/// # Errors
///
/// Returns an error if the store cannot be opened.
pub fn menu(category: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let state = super::storefront()?;
    let catalog = CatalogService::new(state.store());

    let products = match category {
        Some(section) => catalog.products_in_category(section),
        None => catalog.products(),
    };

    if products.is_empty() {
        info!("No products found");
        return Ok(());
    }

    for product in products {
        info!(
            "{:<28} {:<14} {:>12}  {}",
            product.id.to_string(),
            product.category,
            product.price.to_string(),
            product.name
        );
    }
    Ok(())
}
