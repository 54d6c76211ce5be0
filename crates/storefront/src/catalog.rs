//! The static product catalog.
//!
//! The catalog is loaded wholesale from a JSON data file at startup and
//! treated as read-only afterwards. It is always passed explicitly into
//! the filtering and pagination layers rather than living in a
//! module-level singleton, so tests can run against synthetic catalogs.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use threadloom_core::{Product, ProductId, slugify};

/// Catalog loading errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// In-memory catalog of products in data-file order.
///
/// Cheaply cloneable via `Arc`; the product list is immutable once
/// loaded.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
    by_id: Arc<HashMap<ProductId, usize>>,
}

impl Catalog {
    /// Load the catalog from a JSON data file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let products: Vec<Product> =
            serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
                path: path.display().to_string(),
                source: e,
            })?;

        tracing::info!(count = products.len(), path = %path.display(), "Loaded catalog");

        Ok(Self::from_products(products))
    }

    /// Build a catalog from an in-memory product list.
    ///
    /// Insertion order is preserved and becomes the canonical listing
    /// order. When duplicate IDs are present the first occurrence wins
    /// for ID lookup.
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut by_id = HashMap::with_capacity(products.len());
        for (idx, product) in products.iter().enumerate() {
            if by_id.contains_key(&product.id) {
                tracing::warn!(id = %product.id, "Duplicate product id in catalog");
            } else {
                by_id.insert(product.id, idx);
            }
        }

        Self {
            products: Arc::new(products),
            by_id: Arc::new(by_id),
        }
    }

    /// All products in catalog insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.by_id.get(&id).and_then(|&idx| self.products.get(idx))
    }

    /// Look up a product by the slugified form of its name.
    ///
    /// The route segment is slugified before comparison, so lookups are
    /// case-insensitive. A miss is a "not found" state for the caller to
    /// render, not an error.
    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&Product> {
        let wanted = slugify(slug);
        self.products.iter().find(|p| p.slug() == wanted)
    }

    /// Distinct color names across the catalog, in first-seen order.
    ///
    /// Drives the shop page's color swatch list. Comparison is
    /// case-insensitive; the first-seen spelling is kept.
    #[must_use]
    pub fn color_options(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for product in self.products.iter() {
            for color in &product.colors {
                if !seen.iter().any(|c| c.eq_ignore_ascii_case(color)) {
                    seen.push(color.clone());
                }
            }
        }
        seen
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use threadloom_core::{DressStyle, GarmentType};

    fn product(id: i32, name: &str, colors: &[&str]) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: String::new(),
            stars: 4.0,
            price: "50".parse().unwrap(),
            offer_price: "40".parse().unwrap(),
            garment: GarmentType::TShirt,
            dress_style: DressStyle::Casual,
            colors: colors.iter().map(ToString::to_string).collect(),
            sizes: vec!["M".to_string()],
            quantity: 5,
            images: BTreeMap::new(),
            reviews: Vec::new(),
            faq: Vec::new(),
            date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::from_products(vec![
            product(1, "Tee One", &["Black"]),
            product(2, "Tee Two", &["Red"]),
        ]);
        assert_eq!(catalog.get(ProductId::new(2)).unwrap().name, "Tee Two");
        assert!(catalog.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_find_by_slug() {
        let catalog = Catalog::from_products(vec![product(1, "Loose Fit Jeans", &["Blue"])]);
        assert!(catalog.find_by_slug("loose-fit-jeans").is_some());
        assert!(catalog.find_by_slug("Loose-Fit-Jeans").is_some());
        assert!(catalog.find_by_slug("no-such-item").is_none());
    }

    #[test]
    fn test_color_options_first_seen_order() {
        let catalog = Catalog::from_products(vec![
            product(1, "A", &["Black", "Red"]),
            product(2, "B", &["red", "Green"]),
        ]);
        assert_eq!(catalog.color_options(), ["Black", "Red", "Green"]);
    }

    #[test]
    fn test_products_preserve_insertion_order() {
        let catalog = Catalog::from_products(vec![
            product(3, "C", &["Black"]),
            product(1, "A", &["Black"]),
            product(2, "B", &["Black"]),
        ]);
        let names: Vec<_> = catalog.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["C", "A", "B"]);
    }
}
