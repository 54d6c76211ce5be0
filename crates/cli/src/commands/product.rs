//! Show a product detail page by slug.

use tracing::info;

use threadloom_storefront::catalog::Catalog;
use threadloom_storefront::config::StorefrontConfig;
use threadloom_storefront::detail::ProductDetail;
use threadloom_storefront::showcase::{SHOWCASE_LIMIT, related};

/// Print the detail view for a product slug.
///
/// # Errors
///
/// Returns an error if configuration or the catalog cannot be loaded,
/// or no product matches the slug.
pub fn run(slug: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let catalog = Catalog::load(&config.catalog_path)?;

    let detail =
        ProductDetail::from_slug(&catalog, slug).ok_or_else(|| format!("no product: {slug}"))?;
    let product = detail.product();

    info!("{} [{}]", product.name, product.id);
    info!(
        "  {} (was {}, {}% off) - {}",
        product.offer_price,
        product.price,
        product.discount_percent(),
        product.stock_status()
    );
    info!("  {:.1} stars - {} / {}", product.stars, product.garment, product.dress_style);
    info!("  colors: {}", product.colors.join(", "));
    info!("  sizes: {}", product.sizes.join(", "));

    for color in &product.colors {
        let images = product.images_for_color(color);
        info!("  images ({color}): {}", images.join(", "));
    }

    info!("  reviews ({}):", product.reviews.len());
    for review in detail.visible_reviews() {
        info!(
            "    {} - {:.1} - {} - {}",
            review.name, review.rating, review.date, review.review
        );
    }
    if detail.has_more_reviews() {
        info!("    ...and more");
    }

    let also_like = related(&catalog, product, SHOWCASE_LIMIT);
    if !also_like.is_empty() {
        let names: Vec<&str> = also_like.iter().map(|p| p.name.as_str()).collect();
        info!("  you might also like: {}", names.join(", "));
    }

    Ok(())
}
