//! The product record and its embedded feedback types.
//!
//! Products are immutable once loaded from the catalog data file. The
//! admin panel works on its own copy; nothing writes back into a loaded
//! catalog.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::garment::{DressStyle, GarmentType, StockStatus};
use super::id::{ProductId, ReviewId};
use super::pricing::discount_percent;
use super::slug::slugify;

/// A customer review attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    /// Display name of the reviewer.
    pub name: String,
    /// Star rating in 0..=5.
    pub rating: f32,
    pub date: NaiveDate,
    /// Free-text review body.
    pub review: String,
}

/// A frequently-asked question attached to a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// A catalog product.
///
/// Invariants (by convention of the data file, not enforced here):
/// - `id` is unique within a catalog
/// - `offer_price <= price`
/// - `colors` is non-empty for valid entries; a color listed in `colors`
///   may still be missing from `images`, and lookups tolerate that
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Average star rating in 0..=5.
    pub stars: f32,
    /// Base price before any markdown.
    pub price: Decimal,
    /// Current selling price; at or below `price` by convention.
    pub offer_price: Decimal,
    #[serde(rename = "type")]
    pub garment: GarmentType,
    pub dress_style: DressStyle,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    /// On-hand stock count.
    pub quantity: u32,
    /// Ordered image URLs per color name.
    pub images: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub faq: Vec<Faq>,
    /// Date the product entered the catalog; drives "newest" sorting.
    pub date: NaiveDate,
}

impl Product {
    /// URL slug for this product's detail route.
    #[must_use]
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    /// Derived markdown percentage; never stored.
    #[must_use]
    pub fn discount_percent(&self) -> u32 {
        discount_percent(self.price, self.offer_price)
    }

    /// Stock level band for this product's quantity.
    #[must_use]
    pub const fn stock_status(&self) -> StockStatus {
        StockStatus::from_quantity(self.quantity)
    }

    /// Whether this product is offered in the given color.
    ///
    /// Color names compare case-insensitively throughout.
    #[must_use]
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c.eq_ignore_ascii_case(color))
    }

    /// Ordered image URLs for a color.
    ///
    /// A color listed in `colors` but absent from the image map resolves
    /// to an empty slice rather than failing.
    #[must_use]
    pub fn images_for_color(&self, color: &str) -> &[String] {
        self.images
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(color))
            .map_or(&[], |(_, urls)| urls.as_slice())
    }
}
