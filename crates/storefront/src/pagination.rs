//! The pagination controller.
//!
//! Pages are 1-based. The current page is clamped into the valid range
//! before windowing, so a stale page index after a filter change never
//! produces an empty page when items remain.

use serde::{Deserialize, Serialize};

/// Supported page sizes for shop listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PageSize {
    #[default]
    Twelve,
    TwentyFour,
    FortyEight,
}

impl PageSize {
    /// All supported page sizes.
    pub const ALL: [Self; 3] = [Self::Twelve, Self::TwentyFour, Self::FortyEight];

    /// The number of items per page.
    #[must_use]
    pub const fn items(&self) -> usize {
        match self {
            Self::Twelve => 12,
            Self::TwentyFour => 24,
            Self::FortyEight => 48,
        }
    }

    /// Parse a page size from its item count.
    #[must_use]
    pub const fn from_items(items: usize) -> Option<Self> {
        match items {
            12 => Some(Self::Twelve),
            24 => Some(Self::TwentyFour),
            48 => Some(Self::FortyEight),
            _ => None,
        }
    }
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.items())
    }
}

/// One windowed page of an ordered item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items visible on this page, in input order.
    pub items: Vec<T>,
    /// Clamped 1-based page index.
    pub current_page: usize,
    /// Always at least 1, even for an empty input.
    pub total_pages: usize,
}

/// A token in the rendered page-number rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Number(usize),
    Ellipsis,
}

/// Total page count for an item count and page size: `max(1, ceil)`.
#[must_use]
pub const fn total_pages(item_count: usize, page_size: PageSize) -> usize {
    let pages = item_count.div_ceil(page_size.items());
    if pages == 0 { 1 } else { pages }
}

/// Window an ordered item list to one page.
///
/// `current_page` is clamped into `[1, total_pages]` before windowing;
/// out-of-range requests land on the nearest valid page rather than an
/// empty one. The slice itself never panics.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page_size: PageSize, current_page: usize) -> Page<T> {
    let total = total_pages(items.len(), page_size);
    let current = current_page.clamp(1, total);
    let window = items
        .iter()
        .skip((current - 1) * page_size.items())
        .take(page_size.items())
        .cloned()
        .collect();

    Page {
        items: window,
        current_page: current,
        total_pages: total,
    }
}

/// Render the page-number rail for a pager.
///
/// Three zones:
/// - near the start (`current <= 3`): pages 1-4, an ellipsis, the last page
/// - near the end (`current >= total - 2`): page 1, an ellipsis, the last four
/// - otherwise: page 1, ellipsis, `current-1 ..= current+1`, ellipsis, last
///
/// With five or fewer pages every page number is shown directly.
#[must_use]
pub fn page_tokens(current_page: usize, total_pages: usize) -> Vec<PageToken> {
    let total = total_pages.max(1);
    let current = current_page.clamp(1, total);

    if total <= 5 {
        return (1..=total).map(PageToken::Number).collect();
    }

    let mut tokens = Vec::with_capacity(7);

    if current <= 3 {
        tokens.extend((1..=4).map(PageToken::Number));
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::Number(total));
    } else if current >= total - 2 {
        tokens.push(PageToken::Number(1));
        tokens.push(PageToken::Ellipsis);
        tokens.extend((total - 3..=total).map(PageToken::Number));
    } else {
        tokens.push(PageToken::Number(1));
        tokens.push(PageToken::Ellipsis);
        tokens.extend((current - 1..=current + 1).map(PageToken::Number));
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::Number(total));
    }

    tokens
}
