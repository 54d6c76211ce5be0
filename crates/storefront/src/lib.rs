//! Threadloom Storefront library.
//!
//! Everything the customer-facing side of the shop needs: loading the
//! static catalog, filtering it against user-selected predicates, paging
//! the results, resolving per-color product images, per-product detail
//! state, and the locally persisted cart.
//!
//! All operations here are synchronous, pure computations over an
//! injected [`catalog::Catalog`] - there is no I/O outside catalog
//! loading and the cart file.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod detail;
pub mod filter;
pub mod pagination;
pub mod shop;
pub mod showcase;
pub mod variants;
