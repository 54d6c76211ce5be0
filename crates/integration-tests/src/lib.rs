//! Integration tests for Threadloom.
//!
//! The `tests/` directory exercises the storefront and admin crates
//! together over the shared fixture catalog built here. Unit tests
//! live next to the code they cover; these tests check whole flows
//! (filter + paginate, detail + cart, seed + edit).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use threadloom_core::{DressStyle, Faq, GarmentType, Product, ProductId, Review, ReviewId};

/// Builder for fixture products with sensible defaults.
pub struct ProductFixture {
    product: Product,
}

impl ProductFixture {
    /// A casual black T-shirt priced 50/40, quantity 20, dated 2024-01-01.
    #[must_use]
    pub fn new(id: i32, name: &str) -> Self {
        Self {
            product: Product {
                id: ProductId::new(id),
                name: name.to_string(),
                description: format!("{name} for everyday wear."),
                stars: 4.2,
                price: dec("50.00"),
                offer_price: dec("40.00"),
                garment: GarmentType::TShirt,
                dress_style: DressStyle::Casual,
                colors: vec!["Black".to_string()],
                sizes: vec!["M".to_string(), "L".to_string()],
                quantity: 20,
                images: BTreeMap::new(),
                reviews: Vec::new(),
                faq: Vec::new(),
                date: date(2024, 1, 1),
            },
        }
    }

    #[must_use]
    pub fn garment(mut self, garment: GarmentType) -> Self {
        self.product.garment = garment;
        self
    }

    #[must_use]
    pub fn dress_style(mut self, style: DressStyle) -> Self {
        self.product.dress_style = style;
        self
    }

    #[must_use]
    pub fn prices(mut self, price: &str, offer_price: &str) -> Self {
        self.product.price = dec(price);
        self.product.offer_price = dec(offer_price);
        self
    }

    #[must_use]
    pub fn colors(mut self, colors: &[&str]) -> Self {
        self.product.colors = colors.iter().map(ToString::to_string).collect();
        self
    }

    #[must_use]
    pub fn sizes(mut self, sizes: &[&str]) -> Self {
        self.product.sizes = sizes.iter().map(ToString::to_string).collect();
        self
    }

    #[must_use]
    pub fn quantity(mut self, quantity: u32) -> Self {
        self.product.quantity = quantity;
        self
    }

    #[must_use]
    pub fn images(mut self, color: &str, urls: &[&str]) -> Self {
        self.product
            .images
            .insert(color.to_string(), urls.iter().map(ToString::to_string).collect());
        self
    }

    #[must_use]
    pub fn review(mut self, name: &str, rating: f32, body: &str) -> Self {
        let id = ReviewId::new(i32::try_from(self.product.reviews.len()).unwrap_or(0) + 1);
        self.product.reviews.push(Review {
            id,
            name: name.to_string(),
            rating,
            date: date(2024, 3, 15),
            review: body.to_string(),
        });
        self
    }

    #[must_use]
    pub fn faq(mut self, question: &str, answer: &str) -> Self {
        self.product.faq.push(Faq {
            question: question.to_string(),
            answer: answer.to_string(),
        });
        self
    }

    #[must_use]
    pub fn listed(mut self, year: i32, month: u32, day: u32) -> Self {
        self.product.date = date(year, month, day);
        self
    }

    #[must_use]
    pub fn build(self) -> Product {
        self.product
    }
}

/// A small catalog spanning every garment type and dress style.
#[must_use]
pub fn fixture_products() -> Vec<Product> {
    vec![
        ProductFixture::new(1, "Gradient Graphic T-shirt")
            .colors(&["Black", "White"])
            .images("Black", &["/img/gradient-black-1.jpg", "/img/gradient-black-2.jpg"])
            .images("White", &["/img/gradient-white-1.jpg"])
            .review("Alex", 4.5, "Great fit.")
            .faq("Does it shrink?", "Wash cold to be safe.")
            .listed(2024, 5, 1)
            .build(),
        ProductFixture::new(2, "Pleated Formal Shirt")
            .garment(GarmentType::Shirts)
            .dress_style(DressStyle::Formal)
            .prices("120.00", "95.00")
            .colors(&["White"])
            .sizes(&["S", "M"])
            .quantity(3)
            .listed(2024, 2, 10)
            .build(),
        ProductFixture::new(3, "Cargo Gym Shorts")
            .garment(GarmentType::Shorts)
            .dress_style(DressStyle::Gym)
            .prices("35.00", "30.00")
            .colors(&["Green", "Black"])
            .sizes(&["M", "L", "XL"])
            .quantity(0)
            .listed(2024, 4, 20)
            .build(),
        ProductFixture::new(4, "Fleece Party Hoodie")
            .garment(GarmentType::Hoodie)
            .dress_style(DressStyle::Party)
            .prices("90.00", "72.00")
            .colors(&["Red", "Black"])
            .images("Red", &["/img/hoodie-red-1.jpg"])
            .quantity(8)
            .listed(2024, 6, 5)
            .build(),
        ProductFixture::new(5, "Slim Fit Jeans")
            .garment(GarmentType::Jeans)
            .prices("110.00", "110.00")
            .colors(&["Blue"])
            .sizes(&["L", "XL"])
            .quantity(15)
            .listed(2024, 3, 1)
            .build(),
    ]
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str_exact(s).unwrap_or(Decimal::ZERO)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}
