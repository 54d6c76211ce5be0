//! In-memory working copy of the catalog for the admin panel.
//!
//! The panel seeds an [`AdminCatalog`] from the bundled catalog once
//! and then edits that copy. Changes are deliberately not written back
//! to the storefront's data source.

use chrono::NaiveDate;
use threadloom_core::{Product, ProductId, StockStatus};

use crate::error::AdminError;
use crate::form::ProductForm;

/// Stock-level filter for the admin product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StockFilter {
    #[default]
    All,
    InStock,
    OutOfStock,
}

/// Aggregate counts shown on the panel's dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSummary {
    pub total_products: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    pub total_units: u64,
    pub total_reviews: usize,
}

/// Editable, disconnected copy of the product catalog.
#[derive(Debug, Clone, Default)]
pub struct AdminCatalog {
    products: Vec<Product>,
}

impl AdminCatalog {
    /// Seed the working copy from an existing product list.
    #[must_use]
    pub fn seed(products: Vec<Product>) -> Self {
        tracing::info!(count = products.len(), "seeded admin catalog");
        Self { products }
    }

    /// All products in the working copy, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products matching a stock-level filter, in catalog order.
    #[must_use]
    pub fn list(&self, filter: StockFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| match filter {
                StockFilter::All => true,
                StockFilter::InStock => p.quantity > 0,
                StockFilter::OutOfStock => p.quantity == 0,
            })
            .collect()
    }

    /// Validate a form and append it as a new product.
    ///
    /// The new product's id is one past the current maximum (1 for an
    /// empty catalog) and its listing date is `today`.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] when the form is incomplete.
    pub fn create(&mut self, form: ProductForm, today: NaiveDate) -> Result<ProductId, AdminError> {
        form.validate()?;
        let id = self.next_id();
        let product = form.into_product(id, today);
        tracing::info!(product_id = %id, name = %product.name, "created product");
        self.products.push(product);
        Ok(id)
    }

    /// Validate a form and replace an existing product's fields.
    ///
    /// The product keeps its id and listing date.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] for an incomplete form, or
    /// [`AdminError::NotFound`] when no product has `id`.
    pub fn update(&mut self, id: ProductId, form: ProductForm) -> Result<(), AdminError> {
        form.validate()?;
        let existing = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(AdminError::NotFound(id))?;
        let date = existing.date;
        *existing = form.into_product(id, date);
        tracing::info!(product_id = %id, "updated product");
        Ok(())
    }

    /// Remove a product from the working copy.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NotFound`] when no product has `id`.
    pub fn delete(&mut self, id: ProductId) -> Result<(), AdminError> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return Err(AdminError::NotFound(id));
        }
        tracing::info!(product_id = %id, "deleted product");
        Ok(())
    }

    /// Overwrite a product's stock quantity.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NotFound`] when no product has `id`.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) -> Result<(), AdminError> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(AdminError::NotFound(id))?;
        product.quantity = quantity;
        tracing::info!(product_id = %id, quantity, "set stock quantity");
        Ok(())
    }

    /// Dashboard counts over the working copy.
    #[must_use]
    pub fn summary(&self) -> CatalogSummary {
        let mut summary = CatalogSummary {
            total_products: self.products.len(),
            in_stock: 0,
            low_stock: 0,
            out_of_stock: 0,
            total_units: 0,
            total_reviews: 0,
        };
        for product in &self.products {
            match product.stock_status() {
                StockStatus::InStock => summary.in_stock += 1,
                StockStatus::LowStock => summary.low_stock += 1,
                StockStatus::OutOfStock => summary.out_of_stock += 1,
            }
            summary.total_units += u64::from(product.quantity);
            summary.total_reviews += product.reviews.len();
        }
        summary
    }

    fn next_id(&self) -> ProductId {
        let max = self
            .products
            .iter()
            .map(|p| p.id.as_i32())
            .max()
            .unwrap_or(0);
        ProductId::new(max + 1)
    }
}
