//! Inspect and mutate the local cart file.

use tracing::info;

use threadloom_storefront::cart::{CartItem, CartStore};
use threadloom_storefront::catalog::Catalog;
use threadloom_storefront::config::StorefrontConfig;

/// Add a product (by slug) to the cart.
///
/// The color and size default to the product's first declared options
/// when not given; quantity floors at 1.
///
/// # Errors
///
/// Returns an error if configuration or the catalog cannot be loaded,
/// the slug is unknown, or the cart file cannot be written.
pub fn add(
    slug: &str,
    color: Option<&str>,
    size: Option<&str>,
    quantity: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let catalog = Catalog::load(&config.catalog_path)?;

    let product = catalog
        .find_by_slug(slug)
        .ok_or_else(|| format!("no product: {slug}"))?;

    let color = color.or_else(|| product.colors.first().map(String::as_str));
    let size = size.or_else(|| product.sizes.first().map(String::as_str));

    let store = CartStore::new(config.cart_path);
    let item = CartItem::from_product(product, color, size, quantity);
    store.add(item)?;

    info!(name = %product.name, quantity, "added to cart");
    info!("cart now holds {} item(s)", store.count());
    Ok(())
}

/// Print the cart contents.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded.
pub fn list() -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let store = CartStore::new(config.cart_path);

    let items = store.items();
    if items.is_empty() {
        info!("cart is empty");
        return Ok(());
    }

    info!("cart ({} item(s)):", items.len());
    for item in &items {
        info!(
            "  {} x{} - {} / {} - {} each",
            item.name,
            item.quantity,
            item.color.as_deref().unwrap_or("-"),
            item.size.as_deref().unwrap_or("-"),
            item.offer_price
        );
    }
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded or the cart file
/// cannot be written.
pub fn clear() -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let store = CartStore::new(config.cart_path);
    store.clear()?;
    info!("cart cleared");
    Ok(())
}
