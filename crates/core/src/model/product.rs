//! Catalog entries.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// A menu item.
///
/// Catalog entries are immutable from the storefront's point of view: only
/// the admin product service creates or edits them, and carts copy the
/// fields they need rather than referencing live catalog state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Slug identifier, e.g. `mie-ayam-original`.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// One-line description shown on menu cards.
    pub description: String,
    /// Unit price in rupiah.
    pub price: Price,
    /// Menu section, e.g. `Makanan Utama`, `Snack`, `Minuman`.
    pub category: String,
    /// Image reference (file stem under the storefront's product images).
    pub image: String,
}

/// The built-in menu, used whenever no catalog has been persisted.
///
/// Admin edits write a full catalog override to the store; until that
/// happens, this is what customers browse.
#[must_use]
pub fn seed_menu() -> Vec<Product> {
    let item = |id: &str, name: &str, description: &str, price: u64, category: &str| Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        price: Price::from_rupiah(price),
        category: category.to_owned(),
        image: id.to_owned(),
    };

    vec![
        item(
            "ayam-geprek-original",
            "Ayam Geprek Original",
            "Ayam geprek dengan sambal pedas level 1-5.",
            15_000,
            "Makanan Utama",
        ),
        item(
            "ayam-geprek-keju",
            "Ayam Geprek Keju",
            "Ayam geprek dengan topping keju mozzarella.",
            20_000,
            "Makanan Utama",
        ),
        item(
            "mie-ayam-original",
            "Mie Ayam Original",
            "Mie ayam dengan topping ayam cincang dan pangsit.",
            12_000,
            "Makanan Utama",
        ),
        item(
            "mie-ayam-bakso",
            "Mie Ayam Bakso",
            "Mie ayam dengan tambahan bakso sapi.",
            15_000,
            "Makanan Utama",
        ),
        item(
            "bakso-goreng",
            "Bakso Goreng (5 pcs)",
            "Bakso goreng renyah dengan isian daging sapi.",
            10_000,
            "Snack",
        ),
        item(
            "bakso-goreng-pedas",
            "Bakso Goreng Pedas (5 pcs)",
            "Bakso goreng dengan bumbu pedas.",
            12_000,
            "Snack",
        ),
        item(
            "es-rencengan-original",
            "Es Rencengan Original",
            "Minuman segar dengan campuran buah-buahan.",
            8_000,
            "Minuman",
        ),
        item(
            "es-rencengan-spesial",
            "Es Rencengan Spesial",
            "Es rencengan dengan tambahan jelly dan boba.",
            10_000,
            "Minuman",
        ),
        item(
            "nasi-goreng-kampung",
            "Nasi Goreng Kampung",
            "Nasi goreng klasik dengan bumbu khas.",
            13_000,
            "Makanan Utama",
        ),
        item(
            "soto-ayam",
            "Soto Ayam Lamongan",
            "Soto ayam dengan kuah kuning gurih.",
            14_000,
            "Makanan Utama",
        ),
        item(
            "pisang-cokelat",
            "Pisang Cokelat Keju",
            "Pisang goreng dengan topping cokelat dan keju.",
            9_000,
            "Snack",
        ),
        item(
            "es-teh-manis",
            "Es Teh Manis Jumbo",
            "Es teh manis ukuran besar.",
            5_000,
            "Minuman",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_menu_ids_are_unique() {
        let menu = seed_menu();
        let mut ids: Vec<_> = menu.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), menu.len());
    }

    #[test]
    fn test_seed_menu_covers_all_sections() {
        let menu = seed_menu();
        for section in ["Makanan Utama", "Snack", "Minuman"] {
            assert!(menu.iter().any(|p| p.category == section));
        }
    }
}
