//! The locally persisted cart.
//!
//! The cart is a JSON list of product snapshots in a file-backed
//! key-value slot, mirroring a browser's local storage: read once per
//! render, appended via read-modify-write. Concurrent writers race and
//! the last write wins; there is deliberately no lock, matching the
//! storage it models.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use threadloom_core::{Product, ProductId};

/// Cart persistence errors.
///
/// Reads never error: missing or unreadable state is an empty cart.
/// Only writes surface failures.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Snapshot of a product at the moment it was added to the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub name: String,
    pub offer_price: Decimal,
    pub color: Option<String>,
    pub size: Option<String>,
    pub quantity: u32,
}

impl CartItem {
    /// Snapshot a product with the detail page's current selections.
    #[must_use]
    pub fn from_product(
        product: &Product,
        color: Option<&str>,
        size: Option<&str>,
        quantity: u32,
    ) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            offer_price: product.offer_price,
            color: color.map(ToString::to_string),
            size: size.map(ToString::to_string),
            quantity: quantity.max(1),
        }
    }
}

/// File-backed cart store.
#[derive(Debug, Clone)]
pub struct CartStore {
    path: PathBuf,
}

impl CartStore {
    /// Cart store persisting to the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current cart contents.
    ///
    /// A missing file or malformed contents read as an empty cart.
    #[must_use]
    pub fn items(&self) -> Vec<CartItem> {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Unreadable cart state, treating as empty");
            Vec::new()
        })
    }

    /// Number of line items in the cart (header badge count).
    #[must_use]
    pub fn count(&self) -> usize {
        self.items().len()
    }

    /// Append a snapshot via read-modify-write.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the updated list cannot be serialized or
    /// written back.
    pub fn add(&self, item: CartItem) -> Result<(), CartError> {
        let mut items = self.items();
        items.push(item);
        self.write(&items)
    }

    /// Remove everything from the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the empty list cannot be written.
    pub fn clear(&self) -> Result<(), CartError> {
        self.write(&[])
    }

    fn write(&self, items: &[CartItem]) -> Result<(), CartError> {
        let json = serde_json::to_string_pretty(items)?;
        std::fs::write(&self.path, json).map_err(|e| CartError::Io {
            path: self.path.display().to_string(),
            source: e,
        })?;
        tracing::debug!(path = %self.path.display(), count = items.len(), "Wrote cart");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(id: i32, name: &str) -> CartItem {
        CartItem {
            product_id: ProductId::new(id),
            name: name.to_string(),
            offer_price: "40".parse().unwrap(),
            color: Some("Black".to_string()),
            size: Some("M".to_string()),
            quantity: 1,
        }
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CartStore::new(dir.path().join("cart.json"));
        assert!(store.items().is_empty());
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_add_appends_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = CartStore::new(dir.path().join("cart.json"));

        store.add(item(1, "Tee")).unwrap();
        store.add(item(2, "Jeans")).unwrap();

        // A fresh store over the same path sees both lines.
        let reread = CartStore::new(store.path());
        let items = reread.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items.first().unwrap().name, "Tee");
    }

    #[test]
    fn test_corrupt_state_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = CartStore::new(&path);
        assert!(store.items().is_empty());

        // Adding after corruption starts a fresh list.
        store.add(item(1, "Tee")).unwrap();
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_clear_empties_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = CartStore::new(dir.path().join("cart.json"));
        store.add(item(1, "Tee")).unwrap();
        store.clear().unwrap();
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_snapshot_quantity_floors_at_one() {
        let product = threadloom_core::Product {
            id: ProductId::new(9),
            name: "Tee".to_string(),
            description: String::new(),
            stars: 4.0,
            price: "50".parse().unwrap(),
            offer_price: "40".parse().unwrap(),
            garment: threadloom_core::GarmentType::TShirt,
            dress_style: threadloom_core::DressStyle::Casual,
            colors: vec!["Black".to_string()],
            sizes: vec!["M".to_string()],
            quantity: 5,
            images: std::collections::BTreeMap::new(),
            reviews: Vec::new(),
            faq: Vec::new(),
            date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };

        let snapshot = CartItem::from_product(&product, Some("Black"), None, 0);
        assert_eq!(snapshot.quantity, 1);
        assert_eq!(snapshot.product_id, ProductId::new(9));
    }
}
