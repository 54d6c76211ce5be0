//! The catalog filter engine.
//!
//! A [`FilterState`] is the typed predicate set for one page-view: every
//! field has a documented "inactive" sentinel (`None` / empty set) that
//! always matches. A product is kept iff every active predicate matches.
//!
//! Color names compare case-insensitively everywhere. The source data
//! mixes spellings ("Red" / "red"), so raw string equality would drop
//! matches depending on which spelling a swatch was built from.

use rust_decimal::Decimal;
use threadloom_core::{DressStyle, GarmentType, Product};

use crate::catalog::Catalog;

/// User-selected filter predicates for a shop listing.
///
/// `Default` is the fully inactive state that matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Route-bound dress style scope; applied before all other
    /// predicates and not user-changeable within a listing.
    pub dress_style: Option<DressStyle>,
    /// Selected color swatch, if any.
    pub color: Option<String>,
    /// Selected garment category, if any.
    pub garment: Option<GarmentType>,
    /// Selected size labels; a product matches if ANY selected size is
    /// present (OR within this predicate, AND against the others).
    pub sizes: Vec<String>,
    /// Inclusive upper bound on `offer_price`.
    pub max_price: Option<Decimal>,
}

impl FilterState {
    /// The inactive filter scoped to one dress style route.
    #[must_use]
    pub fn for_style(style: DressStyle) -> Self {
        Self {
            dress_style: Some(style),
            ..Self::default()
        }
    }

    /// Whether any user-changeable predicate is active.
    ///
    /// The dress-style scope is fixed per route and does not count.
    #[must_use]
    pub fn has_active_predicates(&self) -> bool {
        self.color.is_some()
            || self.garment.is_some()
            || !self.sizes.is_empty()
            || self.max_price.is_some()
    }

    /// Whether a single product matches every active predicate.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(style) = self.dress_style
            && product.dress_style != style
        {
            return false;
        }

        if let Some(color) = &self.color
            && !product.has_color(color)
        {
            return false;
        }

        if let Some(garment) = self.garment
            && product.garment != garment
        {
            return false;
        }

        if !self.sizes.is_empty()
            && !self.sizes.iter().any(|selected| {
                product
                    .sizes
                    .iter()
                    .any(|s| s.eq_ignore_ascii_case(selected))
            })
        {
            return false;
        }

        if let Some(max) = self.max_price
            && product.offer_price > max
        {
            return false;
        }

        true
    }

    /// Filter the catalog down to matching products.
    ///
    /// Output preserves catalog insertion order; no re-sort is applied
    /// here. An empty result is a valid output the caller renders as a
    /// "no items" state.
    #[must_use]
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog
            .products()
            .iter()
            .filter(|p| self.matches(p))
            .collect()
    }
}
