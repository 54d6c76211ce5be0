//! Integration tests for the file-backed cart: detail-page selections
//! snapshotted into a JSON file and read back.

#![allow(clippy::unwrap_used)]

use std::fs;

use threadloom_integration_tests::fixture_products;
use threadloom_storefront::cart::{CartItem, CartStore};
use threadloom_storefront::catalog::Catalog;
use threadloom_storefront::detail::ProductDetail;

fn catalog() -> Catalog {
    Catalog::from_products(fixture_products())
}

// =============================================================================
// Read-Modify-Write Tests
// =============================================================================

#[test]
fn test_add_from_detail_page_selections() {
    let dir = tempfile::tempdir().unwrap();
    let store = CartStore::new(dir.path().join("cart.json"));
    let catalog = catalog();

    let mut detail = ProductDetail::from_slug(&catalog, "gradient-graphic-t-shirt").unwrap();
    detail.select_color("White");
    detail.select_size("L");
    detail.step_quantity(2);

    let item = CartItem::from_product(
        detail.product(),
        detail.selected_color(),
        detail.selected_size(),
        detail.quantity(),
    );
    store.add(item).unwrap();

    let items = store.items();
    assert_eq!(items.len(), 1);
    let item = items.first().unwrap();
    assert_eq!(item.name, "Gradient Graphic T-shirt");
    assert_eq!(item.color.as_deref(), Some("White"));
    assert_eq!(item.size.as_deref(), Some("L"));
    assert_eq!(item.quantity, 3);
}

#[test]
fn test_adds_append_across_store_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");
    let catalog = catalog();
    let product = catalog.find_by_slug("slim-fit-jeans").unwrap();

    CartStore::new(&path)
        .add(CartItem::from_product(product, None, None, 1))
        .unwrap();
    // A fresh store over the same file sees and extends the state.
    let store = CartStore::new(&path);
    store
        .add(CartItem::from_product(product, Some("Blue"), Some("XL"), 2))
        .unwrap();

    assert_eq!(store.count(), 2);
}

#[test]
fn test_clear_empties_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = CartStore::new(dir.path().join("cart.json"));
    let catalog = catalog();
    let product = catalog.find_by_slug("slim-fit-jeans").unwrap();

    store
        .add(CartItem::from_product(product, None, None, 1))
        .unwrap();
    store.clear().unwrap();

    assert!(store.items().is_empty());
}

// =============================================================================
// Corrupt State Tests
// =============================================================================

#[test]
fn test_missing_file_reads_as_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    let store = CartStore::new(dir.path().join("never-written.json"));
    assert!(store.items().is_empty());
    assert_eq!(store.count(), 0);
}

#[test]
fn test_corrupt_file_reads_as_empty_and_is_recoverable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");
    fs::write(&path, "{ not json").unwrap();

    let store = CartStore::new(&path);
    assert!(store.items().is_empty());

    // The next write replaces the corrupt state.
    let catalog = catalog();
    let product = catalog.find_by_slug("slim-fit-jeans").unwrap();
    store
        .add(CartItem::from_product(product, None, None, 1))
        .unwrap();
    assert_eq!(store.count(), 1);
}
