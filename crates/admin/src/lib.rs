//! Threadloom Admin library.
//!
//! The admin panel manages products on its own in-memory copy of the
//! catalog, seeded once at login. Edits never persist and never merge
//! back into the storefront's shared catalog; that disconnect is the
//! panel's contract, not an accident.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod error;
pub mod form;

pub use catalog::{AdminCatalog, CatalogSummary, StockFilter};
pub use error::AdminError;
pub use form::ProductForm;
