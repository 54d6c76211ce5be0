//! Integration tests for listing pagination: windowing, clamping, and
//! the page-token rail as rendered through a shop session.

#![allow(clippy::unwrap_used)]

use threadloom_integration_tests::ProductFixture;
use threadloom_storefront::catalog::Catalog;
use threadloom_storefront::pagination::{PageSize, PageToken};
use threadloom_storefront::shop::ShopSession;

fn session_with(count: i32) -> ShopSession {
    let products = (1..=count)
        .map(|i| ProductFixture::new(i, &format!("Item {i}")).build())
        .collect();
    ShopSession::new(Catalog::from_products(products), None)
}

fn numbers(tokens: &[PageToken]) -> Vec<String> {
    tokens
        .iter()
        .map(|t| match t {
            PageToken::Number(n) => n.to_string(),
            PageToken::Ellipsis => "...".to_string(),
        })
        .collect()
}

// =============================================================================
// Windowing Tests
// =============================================================================

#[test]
fn test_thirty_items_at_size_twelve() {
    let mut session = session_with(30);

    let page = session.page();
    assert_eq!(page.products.len(), 12);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.products.first().unwrap().id.as_i32(), 1);

    session.set_page(3);
    let page = session.page();
    assert_eq!(page.products.len(), 6);
    assert_eq!(page.products.first().unwrap().id.as_i32(), 25);
}

#[test]
fn test_page_beyond_end_clamps_to_last() {
    let mut session = session_with(30);
    session.set_page(99);

    let page = session.page();
    assert_eq!(page.current_page, 3);
    assert_eq!(page.products.len(), 6);
    // The clamp persists for subsequent renders.
    assert_eq!(session.current_page(), 3);
}

#[test]
fn test_page_size_change_reclamps_without_reset() {
    let mut session = session_with(30);
    session.set_page(3);
    session.set_page_size(PageSize::TwentyFour);

    let page = session.page();
    // 30 items at 24/page is 2 pages; page 3 clamps to 2.
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.current_page, 2);
    assert_eq!(page.products.len(), 6);
}

#[test]
fn test_empty_listing_still_has_one_page() {
    let mut session = session_with(0);
    let page = session.page();
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.current_page, 1);
    assert!(page.products.is_empty());
}

// =============================================================================
// Page Token Rail Tests
// =============================================================================

#[test]
fn test_token_rail_near_start() {
    let mut session = session_with(120);
    let page = session.page();
    assert_eq!(page.total_pages, 10);
    assert_eq!(
        numbers(&page.tokens),
        ["1", "2", "3", "4", "...", "10"]
    );
}

#[test]
fn test_token_rail_near_end() {
    let mut session = session_with(120);
    session.set_page(10);
    let page = session.page();
    assert_eq!(
        numbers(&page.tokens),
        ["1", "...", "7", "8", "9", "10"]
    );
}

#[test]
fn test_token_rail_in_the_middle() {
    let mut session = session_with(120);
    session.set_page(5);
    let page = session.page();
    assert_eq!(
        numbers(&page.tokens),
        ["1", "...", "4", "5", "6", "...", "10"]
    );
}

#[test]
fn test_token_rail_small_listing_shows_every_page() {
    let mut session = session_with(50);
    let page = session.page();
    assert_eq!(page.total_pages, 5);
    assert_eq!(numbers(&page.tokens), ["1", "2", "3", "4", "5"]);
}
