//! Stock-management commands over a working copy of the catalog.
//!
//! Each invocation seeds a fresh [`AdminCatalog`] from the bundled
//! catalog, applies the edit, and prints the result. Edits are not
//! written back to the data file.

use tracing::info;

use threadloom_admin::{AdminCatalog, StockFilter};
use threadloom_core::ProductId;
use threadloom_storefront::catalog::Catalog;
use threadloom_storefront::config::StorefrontConfig;

fn working_copy() -> Result<AdminCatalog, Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let catalog = Catalog::load(&config.catalog_path)?;
    Ok(AdminCatalog::seed(catalog.products().to_vec()))
}

/// Print the product listing, optionally restricted by stock level.
///
/// # Errors
///
/// Returns an error if configuration or the catalog cannot be loaded.
pub fn list(filter: StockFilter) -> Result<(), Box<dyn std::error::Error>> {
    let admin = working_copy()?;
    let rows = admin.list(filter);

    info!("{} product(s)", rows.len());
    for product in rows {
        info!(
            "  [{}] {} - {} - {} - stock {}",
            product.id,
            product.name,
            product.offer_price,
            product.stock_status(),
            product.quantity
        );
    }
    Ok(())
}

/// Overwrite a product's stock quantity and print the new stock band.
///
/// # Errors
///
/// Returns an error if loading fails or the id is unknown.
pub fn set_quantity(id: i32, quantity: u32) -> Result<(), Box<dyn std::error::Error>> {
    let mut admin = working_copy()?;
    let id = ProductId::new(id);
    admin.set_quantity(id, quantity)?;

    let product = admin
        .get(id)
        .ok_or_else(|| format!("no product: {id}"))?;
    info!(
        "[{}] {} now at stock {} ({})",
        product.id,
        product.name,
        product.quantity,
        product.stock_status()
    );
    Ok(())
}

/// Delete a product from the working copy.
///
/// # Errors
///
/// Returns an error if loading fails or the id is unknown.
pub fn delete(id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let mut admin = working_copy()?;
    admin.delete(ProductId::new(id))?;
    info!(product_id = id, remaining = admin.products().len(), "deleted product");
    Ok(())
}

/// Print dashboard counts for the catalog.
///
/// # Errors
///
/// Returns an error if configuration or the catalog cannot be loaded.
pub fn summary() -> Result<(), Box<dyn std::error::Error>> {
    let admin = working_copy()?;
    let summary = admin.summary();

    info!("catalog summary");
    info!("  products:     {}", summary.total_products);
    info!("  in stock:     {}", summary.in_stock);
    info!("  low stock:    {}", summary.low_stock);
    info!("  out of stock: {}", summary.out_of_stock);
    info!("  total units:  {}", summary.total_units);
    info!("  reviews:      {}", summary.total_reviews);
    Ok(())
}
