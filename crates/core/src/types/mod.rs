//! Core types for Threadloom.
//!
//! This module provides the catalog domain model and type-safe wrappers
//! for common concepts.

pub mod garment;
pub mod id;
pub mod pricing;
pub mod product;
pub mod slug;

pub use garment::{DressStyle, GarmentType, StockStatus};
pub use id::*;
pub use pricing::discount_percent;
pub use product::{Faq, Product, Review};
pub use slug::slugify;
