//! Per-color variant image resolution and the product-card carousel.
//!
//! Image URLs are all pre-supplied by the catalog; selecting a color or
//! hovering a carousel zone only moves an index, it never fetches.

use threadloom_core::Product;

/// Resolve the image list a product card should cycle through.
///
/// Prefers the selected color's images; when that color has none (or no
/// color is selected), falls back to the first declared color that has
/// any. An empty result is the placeholder signal for the caller.
#[must_use]
pub fn card_images<'a>(product: &'a Product, selected_color: Option<&str>) -> &'a [String] {
    if let Some(color) = selected_color {
        let images = product.images_for_color(color);
        if !images.is_empty() {
            return images;
        }
    }

    product
        .colors
        .iter()
        .map(|c| product.images_for_color(c))
        .find(|imgs| !imgs.is_empty())
        .unwrap_or(&[])
}

/// First image a card or listing row shows for a product.
///
/// `None` means the caller renders its placeholder image.
#[must_use]
pub fn primary_image<'a>(product: &'a Product, selected_color: Option<&str>) -> Option<&'a str> {
    card_images(product, selected_color)
        .first()
        .map(String::as_str)
}

/// Hover-driven image pointer for one product card.
///
/// Hovering the nth zone of the card selects the nth image; leaving the
/// card snaps back to the first. Out-of-range selections are ignored
/// rather than clamped, matching a card whose hover zones always cover
/// exactly the available images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCarousel {
    image_count: usize,
    current_index: usize,
}

impl ImageCarousel {
    /// Carousel over `image_count` images, starting at the first.
    #[must_use]
    pub const fn new(image_count: usize) -> Self {
        Self {
            image_count,
            current_index: 0,
        }
    }

    /// Index of the currently displayed image.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// Select an image by index; ignored when out of range.
    pub const fn select(&mut self, index: usize) {
        if index < self.image_count {
            self.current_index = index;
        }
    }

    /// Snap back to the first image (mouse-leave behavior).
    pub const fn reset(&mut self) {
        self.current_index = 0;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use threadloom_core::{DressStyle, GarmentType, ProductId};

    fn product_with_images(colors: &[&str], images: &[(&str, &[&str])]) -> Product {
        Product {
            id: ProductId::new(1),
            name: "Tee".to_string(),
            description: String::new(),
            stars: 4.0,
            price: "50".parse().unwrap(),
            offer_price: "40".parse().unwrap(),
            garment: GarmentType::TShirt,
            dress_style: DressStyle::Casual,
            colors: colors.iter().map(ToString::to_string).collect(),
            sizes: Vec::new(),
            quantity: 5,
            images: images
                .iter()
                .map(|(c, urls)| {
                    (
                        (*c).to_string(),
                        urls.iter().map(ToString::to_string).collect::<Vec<_>>(),
                    )
                })
                .collect::<BTreeMap<_, _>>(),
            reviews: Vec::new(),
            faq: Vec::new(),
            date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_selected_color_images_win() {
        let p = product_with_images(
            &["Black", "Red"],
            &[("Black", &["b1.jpg"]), ("Red", &["r1.jpg", "r2.jpg"])],
        );
        assert_eq!(card_images(&p, Some("Red")).len(), 2);
        assert_eq!(primary_image(&p, Some("Red")), Some("r1.jpg"));
    }

    #[test]
    fn test_missing_color_falls_back_to_first_with_images() {
        // "White" is declared but has no image entry.
        let p = product_with_images(&["White", "Black"], &[("Black", &["b1.jpg"])]);
        assert_eq!(card_images(&p, Some("White")), ["b1.jpg".to_string()]);
        assert_eq!(primary_image(&p, None), Some("b1.jpg"));
    }

    #[test]
    fn test_no_images_anywhere_is_placeholder_signal() {
        let p = product_with_images(&["Black"], &[]);
        assert!(card_images(&p, Some("Black")).is_empty());
        assert_eq!(primary_image(&p, None), None);
    }

    #[test]
    fn test_carousel_select_and_reset() {
        let mut carousel = ImageCarousel::new(3);
        carousel.select(2);
        assert_eq!(carousel.current_index(), 2);
        carousel.reset();
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_carousel_ignores_out_of_range() {
        let mut carousel = ImageCarousel::new(2);
        carousel.select(1);
        carousel.select(5);
        assert_eq!(carousel.current_index(), 1);
    }
}
