//! Catalog management.
//!
//! The first admin edit materializes the full catalog (seed menu included)
//! under the catalog key; from then on that override is the catalog. The
//! storefront never mutates it.

use tracing::info;

use warung_core::{Price, Product, ProductId, seed_menu};
use warung_storage::{KvStore, StoreError, keys};

/// Errors raised by catalog mutations.
#[derive(Debug, thiserror::Error)]
pub enum ProductAdminError {
    /// A product with this ID already exists.
    #[error("product already exists: {0}")]
    DuplicateProduct(ProductId),

    /// No product with this ID.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    /// Product name is empty (the ID is derived from it).
    #[error("product name cannot be empty")]
    EmptyName,

    /// Store write failed.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

/// A product as entered in the admin form.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Display name; the slug ID is derived from it.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Unit price in whole rupiah.
    pub price_rupiah: u64,
    /// Menu section.
    pub category: String,
    /// Image reference; defaults to the slug when empty.
    pub image: String,
}

/// A partial product edit; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    /// New display name (the ID does not change).
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New unit price in whole rupiah.
    pub price_rupiah: Option<u64>,
    /// New menu section.
    pub category: Option<String>,
    /// New image reference.
    pub image: Option<String>,
}

/// Service for catalog CRUD.
pub struct ProductAdmin<'a> {
    store: &'a KvStore,
}

impl<'a> ProductAdmin<'a> {
    /// Create the service.
    #[must_use]
    pub const fn new(store: &'a KvStore) -> Self {
        Self { store }
    }

    /// The catalog as the admin sees it: the persisted override, or the
    /// seed menu if nothing has been edited yet.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.store.get(keys::CATALOG).unwrap_or_else(seed_menu)
    }

    /// Add a product. The ID is the slug of the name.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty name, a slug collision, or a failed
    /// write.
    pub fn create(&self, new: NewProduct) -> Result<Product, ProductAdminError> {
        let slug = slugify(&new.name);
        if slug.is_empty() {
            return Err(ProductAdminError::EmptyName);
        }
        let id = ProductId::new(slug);

        let mut products = self.products();
        if products.iter().any(|p| p.id == id) {
            return Err(ProductAdminError::DuplicateProduct(id));
        }

        let product = Product {
            image: if new.image.is_empty() {
                id.as_str().to_owned()
            } else {
                new.image
            },
            id,
            name: new.name,
            description: new.description,
            price: Price::from_rupiah(new.price_rupiah),
            category: new.category,
        };
        products.push(product.clone());
        self.store.set(keys::CATALOG, &products)?;

        info!(product = %product.id, "product created");
        Ok(product)
    }

    /// Apply a partial edit to a product.
    ///
    /// # Errors
    ///
    /// Returns [`ProductAdminError::UnknownProduct`] for a missing ID.
    pub fn update(
        &self,
        id: &ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductAdminError> {
        let mut products = self.products();
        let product = products
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or_else(|| ProductAdminError::UnknownProduct(id.clone()))?;

        if let Some(name) = update.name {
            product.name = name;
        }
        if let Some(description) = update.description {
            product.description = description;
        }
        if let Some(price_rupiah) = update.price_rupiah {
            product.price = Price::from_rupiah(price_rupiah);
        }
        if let Some(category) = update.category {
            product.category = category;
        }
        if let Some(image) = update.image {
            product.image = image;
        }
        let updated = product.clone();
        self.store.set(keys::CATALOG, &products)?;

        info!(product = %id, "product updated");
        Ok(updated)
    }

    /// Remove a product from the catalog.
    ///
    /// Existing carts and orders keep their denormalized copies; only new
    /// browsing is affected.
    ///
    /// # Errors
    ///
    /// Returns [`ProductAdminError::UnknownProduct`] for a missing ID.
    pub fn delete(&self, id: &ProductId) -> Result<(), ProductAdminError> {
        let mut products = self.products();
        let before = products.len();
        products.retain(|p| p.id != *id);
        if products.len() == before {
            return Err(ProductAdminError::UnknownProduct(id.clone()));
        }
        self.store.set(keys::CATALOG, &products)?;

        info!(product = %id, "product deleted");
        Ok(())
    }
}

/// Lowercase, alphanumerics kept, everything else collapsed to single
/// hyphens: `"Bakso Goreng (5 pcs)"` becomes `bakso-goreng-5-pcs`.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_hyphen = true; // suppress leading hyphen
    for c in name.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
