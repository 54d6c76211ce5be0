//! Classification enums for catalog products.
//!
//! Both [`GarmentType`] and [`DressStyle`] are closed sets; the serde
//! spellings match the catalog data file exactly ("T-shirt", "Casual", ...).

use serde::{Deserialize, Serialize};

/// Garment category of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GarmentType {
    #[serde(rename = "T-shirt")]
    TShirt,
    Shorts,
    Shirts,
    Hoodie,
    Jeans,
}

impl GarmentType {
    /// All garment categories, in display order.
    pub const ALL: [Self; 5] = [
        Self::TShirt,
        Self::Shorts,
        Self::Shirts,
        Self::Hoodie,
        Self::Jeans,
    ];

    /// Catalog-file spelling of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TShirt => "T-shirt",
            Self::Shorts => "Shorts",
            Self::Shirts => "Shirts",
            Self::Hoodie => "Hoodie",
            Self::Jeans => "Jeans",
        }
    }
}

impl std::fmt::Display for GarmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GarmentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "t-shirt" | "tshirt" => Ok(Self::TShirt),
            "shorts" => Ok(Self::Shorts),
            "shirts" => Ok(Self::Shirts),
            "hoodie" => Ok(Self::Hoodie),
            "jeans" => Ok(Self::Jeans),
            _ => Err(format!("invalid garment type: {s}")),
        }
    }
}

/// Dress style of a product. Each shop listing is scoped to one style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DressStyle {
    Casual,
    Formal,
    Party,
    Gym,
}

impl DressStyle {
    /// All dress styles, in display order.
    pub const ALL: [Self; 4] = [Self::Casual, Self::Formal, Self::Party, Self::Gym];

    /// Catalog-file spelling of the style.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Casual => "Casual",
            Self::Formal => "Formal",
            Self::Party => "Party",
            Self::Gym => "Gym",
        }
    }
}

impl std::fmt::Display for DressStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DressStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "casual" => Ok(Self::Casual),
            "formal" => Ok(Self::Formal),
            "party" => Ok(Self::Party),
            "gym" => Ok(Self::Gym),
            _ => Err(format!("invalid dress style: {s}")),
        }
    }
}

/// Stock level derived from a product's on-hand quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    /// Quantity is zero.
    OutOfStock,
    /// Quantity is in 1..10.
    LowStock,
    /// Quantity is 10 or more.
    InStock,
}

impl StockStatus {
    /// Classify an on-hand quantity.
    #[must_use]
    pub const fn from_quantity(quantity: u32) -> Self {
        match quantity {
            0 => Self::OutOfStock,
            1..=9 => Self::LowStock,
            _ => Self::InStock,
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfStock => write!(f, "out-of-stock"),
            Self::LowStock => write!(f, "low-stock"),
            Self::InStock => write!(f, "in-stock"),
        }
    }
}
