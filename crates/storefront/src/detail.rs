//! Per-product detail page state.
//!
//! One [`ProductDetail`] owns everything the detail view mutates: the
//! selected variant, the quantity stepper, the image pointer, the
//! visible-review window, and locally posted reviews. The detail holds
//! its own copy of the product, so posted reviews live only for the
//! session and never reach the shared catalog.

use chrono::NaiveDate;
use threadloom_core::{Product, Review, ReviewId};

use crate::catalog::Catalog;
use crate::variants::card_images;

/// Reviews revealed initially and added per "load more" click.
pub const REVIEWS_PAGE_STEP: usize = 4;

/// View state for one product detail page.
#[derive(Debug, Clone)]
pub struct ProductDetail {
    product: Product,
    selected_color: Option<String>,
    selected_size: Option<String>,
    quantity: u32,
    image_index: usize,
    reviews_to_show: usize,
}

impl ProductDetail {
    /// Resolve a route segment to a detail page.
    ///
    /// Returns `None` for an unknown slug; the caller renders its
    /// "not found" state. The initial color is the product's first
    /// declared color.
    #[must_use]
    pub fn from_slug(catalog: &Catalog, slug: &str) -> Option<Self> {
        catalog.find_by_slug(slug).cloned().map(Self::new)
    }

    /// Build detail state around a product snapshot.
    #[must_use]
    pub fn new(product: Product) -> Self {
        let selected_color = product.colors.first().cloned();
        Self {
            product,
            selected_color,
            selected_size: None,
            quantity: 1,
            image_index: 0,
            reviews_to_show: REVIEWS_PAGE_STEP,
        }
    }

    /// The product being viewed.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// Currently selected color, if the product declares any.
    #[must_use]
    pub fn selected_color(&self) -> Option<&str> {
        self.selected_color.as_deref()
    }

    /// Currently selected size label.
    #[must_use]
    pub fn selected_size(&self) -> Option<&str> {
        self.selected_size.as_deref()
    }

    /// Quantity chosen on the stepper; never below 1.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Select a color; resets the image pointer to the first image.
    ///
    /// Colors not declared on the product are ignored.
    pub fn select_color(&mut self, color: &str) {
        if self.product.has_color(color) {
            self.selected_color = Some(color.to_string());
            self.image_index = 0;
        }
    }

    /// Select a size label; sizes not offered are ignored.
    pub fn select_size(&mut self, size: &str) {
        if self
            .product
            .sizes
            .iter()
            .any(|s| s.eq_ignore_ascii_case(size))
        {
            self.selected_size = Some(size.to_string());
        }
    }

    /// Step the quantity by `delta`, floored at 1.
    pub fn step_quantity(&mut self, delta: i32) {
        let next = i64::from(self.quantity) + i64::from(delta);
        self.quantity = u32::try_from(next.max(1)).unwrap_or(1);
    }

    /// Image list for the selected color, with first-color fallback.
    #[must_use]
    pub fn images(&self) -> &[String] {
        card_images(&self.product, self.selected_color.as_deref())
    }

    /// Point the main image at a thumbnail index; ignored out of range.
    pub fn select_image(&mut self, index: usize) {
        if index < self.images().len() {
            self.image_index = index;
        }
    }

    /// URL of the main image, `None` when the placeholder should show.
    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        self.images().get(self.image_index).map(String::as_str)
    }

    /// Reviews currently revealed, oldest first.
    #[must_use]
    pub fn visible_reviews(&self) -> &[Review] {
        let shown = self.reviews_to_show.min(self.product.reviews.len());
        self.product.reviews.get(..shown).unwrap_or_default()
    }

    /// Whether more reviews remain beyond the visible window.
    #[must_use]
    pub fn has_more_reviews(&self) -> bool {
        self.reviews_to_show < self.product.reviews.len()
    }

    /// Reveal the next batch of reviews.
    pub const fn show_more_reviews(&mut self) {
        self.reviews_to_show += REVIEWS_PAGE_STEP;
    }

    /// Append a locally posted review.
    ///
    /// The id is one past the current review count and the date is the
    /// submission day. The review exists only in this detail state.
    pub fn post_review(&mut self, name: &str, body: &str, rating: f32, today: NaiveDate) {
        let id = ReviewId::new(i32::try_from(self.product.reviews.len()).unwrap_or(0) + 1);
        self.product.reviews.push(Review {
            id,
            name: name.to_string(),
            rating: rating.clamp(0.0, 5.0),
            date: today,
            review: body.to_string(),
        });
        tracing::debug!(product = %self.product.id, review = %id, "Posted local review");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use threadloom_core::{DressStyle, GarmentType, ProductId};

    fn product() -> Product {
        let mut images = BTreeMap::new();
        images.insert(
            "Black".to_string(),
            vec!["b1.jpg".to_string(), "b2.jpg".to_string()],
        );
        images.insert("Red".to_string(), vec!["r1.jpg".to_string()]);

        Product {
            id: ProductId::new(1),
            name: "Courage Graphic Tee".to_string(),
            description: String::new(),
            stars: 4.5,
            price: "50".parse().unwrap(),
            offer_price: "40".parse().unwrap(),
            garment: GarmentType::TShirt,
            dress_style: DressStyle::Casual,
            colors: vec!["Black".to_string(), "Red".to_string()],
            sizes: vec!["S".to_string(), "M".to_string()],
            quantity: 5,
            images,
            reviews: Vec::new(),
            faq: Vec::new(),
            date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_initial_color_is_first_declared() {
        let detail = ProductDetail::new(product());
        assert_eq!(detail.selected_color(), Some("Black"));
        assert_eq!(detail.current_image(), Some("b1.jpg"));
    }

    #[test]
    fn test_color_change_resets_image_index() {
        let mut detail = ProductDetail::new(product());
        detail.select_image(1);
        assert_eq!(detail.current_image(), Some("b2.jpg"));
        detail.select_color("Red");
        assert_eq!(detail.current_image(), Some("r1.jpg"));
    }

    #[test]
    fn test_undeclared_color_is_ignored() {
        let mut detail = ProductDetail::new(product());
        detail.select_color("Chartreuse");
        assert_eq!(detail.selected_color(), Some("Black"));
    }

    #[test]
    fn test_quantity_floors_at_one() {
        let mut detail = ProductDetail::new(product());
        detail.step_quantity(-5);
        assert_eq!(detail.quantity(), 1);
        detail.step_quantity(2);
        assert_eq!(detail.quantity(), 3);
    }

    #[test]
    fn test_post_review_appends_with_sequential_id() {
        let mut detail = ProductDetail::new(product());
        detail.post_review("Sam", "Lovely shirt.", 5.0, today());
        detail.post_review("Kit", "Runs small.", 3.0, today());

        let reviews = &detail.product().reviews;
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews.first().unwrap().id, ReviewId::new(1));
        assert_eq!(reviews.get(1).unwrap().id, ReviewId::new(2));
        assert_eq!(reviews.get(1).unwrap().date, today());
    }

    #[test]
    fn test_review_window_grows_in_steps() {
        let mut detail = ProductDetail::new(product());
        for i in 0..6 {
            detail.post_review(&format!("r{i}"), "ok", 4.0, today());
        }
        // Window was already at the first step before posting.
        assert_eq!(detail.visible_reviews().len(), 4);
        assert!(detail.has_more_reviews());
        detail.show_more_reviews();
        assert_eq!(detail.visible_reviews().len(), 6);
        assert!(!detail.has_more_reviews());
    }

    #[test]
    fn test_from_slug_miss_is_none() {
        let catalog = Catalog::from_products(vec![product()]);
        assert!(ProductDetail::from_slug(&catalog, "courage-graphic-tee").is_some());
        assert!(ProductDetail::from_slug(&catalog, "missing-item").is_none());
    }
}
