//! Shop listing session: filter state plus pagination over one catalog.
//!
//! A session belongs to a single page-view. Any filter mutation snaps
//! pagination back to page 1; page-size changes recompute and clamp the
//! current page instead.

use rust_decimal::Decimal;
use threadloom_core::{DressStyle, GarmentType, Product};

use crate::catalog::Catalog;
use crate::filter::FilterState;
use crate::pagination::{Page, PageSize, PageToken, page_tokens, paginate};

/// One rendered page of a shop listing.
#[derive(Debug, Clone)]
pub struct ShopPage<'a> {
    /// Products visible on this page, in catalog order.
    pub products: Vec<&'a Product>,
    /// Total products matching the current filter.
    pub matching_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
    /// Page-number rail tokens for the pager.
    pub tokens: Vec<PageToken>,
}

/// Filter + pagination state for one shop page-view.
#[derive(Debug, Clone)]
pub struct ShopSession {
    catalog: Catalog,
    filter: FilterState,
    page_size: PageSize,
    current_page: usize,
}

impl ShopSession {
    /// Open a session over a catalog, optionally scoped to the dress
    /// style bound to the current route.
    #[must_use]
    pub fn new(catalog: Catalog, dress_style: Option<DressStyle>) -> Self {
        Self {
            catalog,
            filter: FilterState {
                dress_style,
                ..FilterState::default()
            },
            page_size: PageSize::default(),
            current_page: 1,
        }
    }

    /// The active filter predicates.
    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Select or clear the color predicate.
    pub fn set_color(&mut self, color: Option<String>) {
        self.filter.color = color;
        self.current_page = 1;
    }

    /// Select or clear the garment-type predicate.
    pub fn set_garment(&mut self, garment: Option<GarmentType>) {
        self.filter.garment = garment;
        self.current_page = 1;
    }

    /// Replace the selected size set (any-match semantics).
    pub fn set_sizes(&mut self, sizes: Vec<String>) {
        self.filter.sizes = sizes;
        self.current_page = 1;
    }

    /// Toggle a single size in or out of the selected set.
    pub fn toggle_size(&mut self, size: &str) {
        if let Some(pos) = self
            .filter
            .sizes
            .iter()
            .position(|s| s.eq_ignore_ascii_case(size))
        {
            self.filter.sizes.remove(pos);
        } else {
            self.filter.sizes.push(size.to_string());
        }
        self.current_page = 1;
    }

    /// Set or clear the inclusive max-price bound.
    pub fn set_max_price(&mut self, max_price: Option<Decimal>) {
        self.filter.max_price = max_price;
        self.current_page = 1;
    }

    /// Reset every user-changeable predicate; the route-bound dress
    /// style scope survives.
    pub fn clear_filters(&mut self) {
        self.filter = FilterState {
            dress_style: self.filter.dress_style,
            ..FilterState::default()
        };
        self.current_page = 1;
    }

    /// Navigate to a page; clamped when the listing is rendered.
    pub const fn set_page(&mut self, page: usize) {
        self.current_page = page;
    }

    /// Switch the page size, keeping the current page (clamped on
    /// render) rather than resetting it.
    pub const fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
    }

    /// All products matching the current filter, in catalog order.
    #[must_use]
    pub fn matching(&self) -> Vec<&Product> {
        self.filter.apply(&self.catalog)
    }

    /// Render the current page of the listing.
    pub fn page(&mut self) -> ShopPage<'_> {
        let matching = self.filter.apply(&self.catalog);
        let matching_count = matching.len();

        let Page {
            items,
            current_page,
            total_pages,
        } = paginate(&matching, self.page_size, self.current_page);

        // Persist the clamp so subsequent navigation starts from the
        // page actually shown.
        self.current_page = current_page;

        ShopPage {
            products: items,
            matching_count,
            current_page,
            total_pages,
            tokens: page_tokens(current_page, total_pages),
        }
    }
}
