//! The add/edit product form model.
//!
//! [`ProductForm`] accumulates field edits the way the panel's form
//! does: colors, sizes, and per-color image URLs are added and removed
//! one at a time, and free-text numeric inputs parse leniently with
//! malformed values defaulting to zero. Validation happens only on
//! submit.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use threadloom_core::{DressStyle, Faq, GarmentType, Product, ProductId, Review};

use crate::error::AdminError;

/// Draft state for a product being added or edited.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub stars: f32,
    pub price: Decimal,
    pub offer_price: Decimal,
    pub garment: GarmentType,
    pub dress_style: DressStyle,
    pub quantity: u32,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub images: BTreeMap<String, Vec<String>>,
    pub reviews: Vec<Review>,
    pub faq: Vec<Faq>,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            stars: 0.0,
            price: Decimal::ZERO,
            offer_price: Decimal::ZERO,
            garment: GarmentType::TShirt,
            dress_style: DressStyle::Casual,
            quantity: 0,
            colors: Vec::new(),
            sizes: Vec::new(),
            images: BTreeMap::new(),
            reviews: Vec::new(),
            faq: Vec::new(),
        }
    }
}

impl ProductForm {
    /// Pre-fill the form from an existing product (edit flow).
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            stars: product.stars,
            price: product.price,
            offer_price: product.offer_price,
            garment: product.garment,
            dress_style: product.dress_style,
            quantity: product.quantity,
            colors: product.colors.clone(),
            sizes: product.sizes.clone(),
            images: product.images.clone(),
            reviews: product.reviews.clone(),
            faq: product.faq.clone(),
        }
    }

    /// Set the price from free-text input; malformed input is zero.
    pub fn set_price_input(&mut self, input: &str) {
        self.price = parse_decimal_input(input);
    }

    /// Set the offer price from free-text input; malformed input is zero.
    pub fn set_offer_price_input(&mut self, input: &str) {
        self.offer_price = parse_decimal_input(input);
    }

    /// Set the quantity from free-text input; malformed input is zero.
    pub fn set_quantity_input(&mut self, input: &str) {
        self.quantity = input.trim().parse().unwrap_or(0);
    }

    /// Add a color, creating its (empty) image bucket. Duplicates are
    /// ignored case-insensitively.
    pub fn add_color(&mut self, color: &str) {
        let color = color.trim();
        if color.is_empty() || self.colors.iter().any(|c| c.eq_ignore_ascii_case(color)) {
            return;
        }
        self.colors.push(color.to_string());
        self.images.entry(color.to_string()).or_default();
    }

    /// Remove a color and drop its image bucket.
    pub fn remove_color(&mut self, color: &str) {
        self.colors.retain(|c| !c.eq_ignore_ascii_case(color));
        self.images
            .retain(|c, _| !c.eq_ignore_ascii_case(color));
    }

    /// Add a size label; duplicates are ignored case-insensitively.
    pub fn add_size(&mut self, size: &str) {
        let size = size.trim();
        if size.is_empty() || self.sizes.iter().any(|s| s.eq_ignore_ascii_case(size)) {
            return;
        }
        self.sizes.push(size.to_string());
    }

    /// Remove a size label.
    pub fn remove_size(&mut self, size: &str) {
        self.sizes.retain(|s| !s.eq_ignore_ascii_case(size));
    }

    /// Append an image URL to a declared color's bucket.
    ///
    /// Ignored for colors the form does not declare; the form UI only
    /// offers declared colors.
    pub fn add_image(&mut self, color: &str, url: &str) {
        if url.is_empty() || !self.colors.iter().any(|c| c.eq_ignore_ascii_case(color)) {
            return;
        }
        if let Some((_, bucket)) = self
            .images
            .iter_mut()
            .find(|(c, _)| c.eq_ignore_ascii_case(color))
        {
            bucket.push(url.to_string());
        }
    }

    /// Remove the image at `index` from a color's bucket; ignored when
    /// out of range.
    pub fn remove_image(&mut self, color: &str, index: usize) {
        if let Some((_, bucket)) = self
            .images
            .iter_mut()
            .find(|(c, _)| c.eq_ignore_ascii_case(color))
            && index < bucket.len()
        {
            bucket.remove(index);
        }
    }

    /// Check the required fields: name, a positive price, at least one
    /// color.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] naming the first failing field.
    pub fn validate(&self) -> Result<(), AdminError> {
        if self.name.trim().is_empty() {
            return Err(AdminError::Validation("name is required".to_string()));
        }
        if self.price <= Decimal::ZERO {
            return Err(AdminError::Validation(
                "price must be greater than zero".to_string(),
            ));
        }
        if self.colors.is_empty() {
            return Err(AdminError::Validation(
                "at least one color is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Materialize the draft into a product record.
    #[must_use]
    pub fn into_product(self, id: ProductId, date: NaiveDate) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            stars: self.stars,
            price: self.price,
            offer_price: self.offer_price,
            garment: self.garment,
            dress_style: self.dress_style,
            colors: self.colors,
            sizes: self.sizes,
            quantity: self.quantity,
            images: self.images,
            reviews: self.reviews,
            faq: self.faq,
            date,
        }
    }
}

/// Lenient decimal parsing: malformed input defaults to zero.
fn parse_decimal_input(input: &str) -> Decimal {
    input.trim().parse().unwrap_or(Decimal::ZERO)
}
