//! Curated home-page listings.
//!
//! Showcases are the only place a listing re-sorts the catalog; the
//! filter engine itself always preserves insertion order.

use threadloom_core::Product;

use crate::catalog::Catalog;

/// How many items a home-page showcase row displays.
pub const SHOWCASE_LIMIT: usize = 4;

/// Sort criterion for a showcase row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Showcase {
    /// In-stock products, newest catalog date first.
    Newest,
    /// Products with quantity strictly inside (0, 10), lowest quantity
    /// first. Inherited heuristic: "almost sold out" stands in for
    /// "best seller".
    TopSelling,
}

/// Produce a showcase row of at most `limit` products.
#[must_use]
pub fn showcase<'a>(catalog: &'a Catalog, kind: Showcase, limit: usize) -> Vec<&'a Product> {
    let mut rows: Vec<&Product> = match kind {
        Showcase::Newest => catalog
            .products()
            .iter()
            .filter(|p| p.quantity > 0)
            .collect(),
        Showcase::TopSelling => catalog
            .products()
            .iter()
            .filter(|p| p.quantity > 0 && p.quantity < 10)
            .collect(),
    };

    match kind {
        Showcase::Newest => rows.sort_by(|a, b| b.date.cmp(&a.date)),
        Showcase::TopSelling => rows.sort_by_key(|p| p.quantity),
    }

    rows.truncate(limit);
    rows
}

/// Products sharing a garment category, excluding the product itself.
///
/// Backs the "you might also like" row on the detail page.
#[must_use]
pub fn related<'a>(catalog: &'a Catalog, product: &Product, limit: usize) -> Vec<&'a Product> {
    catalog
        .products()
        .iter()
        .filter(|p| p.garment == product.garment && p.id != product.id)
        .take(limit)
        .collect()
}
