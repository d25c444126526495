//! Catalog lookup.
//!
//! Customers browse whatever the admin last persisted under the catalog
//! key; until an admin has edited anything, the built-in menu applies.

use warung_core::{Product, ProductId, seed_menu};
use warung_storage::{KvStore, keys};

/// Read-only catalog access for the storefront.
pub struct CatalogService<'a> {
    store: &'a KvStore,
}

impl<'a> CatalogService<'a> {
    /// Create the service.
    #[must_use]
    pub const fn new(store: &'a KvStore) -> Self {
        Self { store }
    }

    /// All products: the persisted catalog override, or the seed menu.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.store
            .get(keys::CATALOG)
            .unwrap_or_else(seed_menu)
    }

    /// Products in one menu section.
    #[must_use]
    pub fn products_in_category(&self, category: &str) -> Vec<Product> {
        self.products()
            .into_iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Look up one product. `None` renders as a placeholder view, never an
    /// error.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<Product> {
        self.products().into_iter().find(|p| p.id == *id)
    }

    /// Distinct menu sections, in catalog order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for product in self.products() {
            if !categories.contains(&product.category) {
                categories.push(product.category);
            }
        }
        categories
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, KvStore) {
        let dir = TempDir::new().unwrap();
        let store = KvStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_falls_back_to_seed_menu() {
        let (_dir, store) = store();
        let catalog = CatalogService::new(&store);
        assert_eq!(catalog.products(), seed_menu());
    }

    #[test]
    fn test_persisted_catalog_wins_over_seed() {
        let (_dir, store) = store();
        let short_menu = vec![seed_menu().into_iter().next().unwrap()];
        store.set(keys::CATALOG, &short_menu).unwrap();

        let catalog = CatalogService::new(&store);
        assert_eq!(catalog.products(), short_menu);
    }

    #[test]
    fn test_lookup_unknown_product_is_none() {
        let (_dir, store) = store();
        let catalog = CatalogService::new(&store);
        assert!(catalog.product(&ProductId::new("tidak-ada")).is_none());
    }

    #[test]
    fn test_categories_distinct_in_order() {
        let (_dir, store) = store();
        let catalog = CatalogService::new(&store);
        assert_eq!(
            catalog.categories(),
            ["Makanan Utama", "Snack", "Minuman"]
        );
    }

    #[test]
    fn test_products_in_category() {
        let (_dir, store) = store();
        let catalog = CatalogService::new(&store);
        let drinks = catalog.products_in_category("Minuman");
        assert!(!drinks.is_empty());
        assert!(drinks.iter().all(|p| p.category == "Minuman"));
    }
}
