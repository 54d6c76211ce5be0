//! URL slugs derived from product names.
//!
//! Route segments identify products by slugified name rather than ID,
//! so lookup must produce the same slug the links were built with.

/// Slugify a product name: lowercase, with each whitespace run collapsed
/// to a single hyphen.
///
/// # Example
///
/// ```rust
/// assert_eq!(threadloom_core::slugify("Classic  Denim Jacket"), "classic-denim-jacket");
/// ```
#[must_use]
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Gradient Graphic T-shirt"), "gradient-graphic-t-shirt");
    }

    #[test]
    fn test_slugify_collapses_whitespace() {
        assert_eq!(slugify("  Loose   Fit  Jeans "), "loose-fit-jeans");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
    }
}
