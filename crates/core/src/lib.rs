//! Threadloom Core - Shared catalog types library.
//!
//! This crate provides the common types used across all Threadloom
//! components:
//! - `storefront` - Customer-facing catalog browsing, filtering, and cart
//! - `admin` - Catalog management panel working on its own in-memory copy
//! - `cli` - Command-line front end for both
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O and no
//! global state. The catalog itself is loaded and owned elsewhere and
//! passed into anything that needs it, so every consumer can be tested
//! against a synthetic catalog.
//!
//! # Modules
//!
//! - [`types`] - Product records, classification enums, type-safe IDs,
//!   pricing helpers, and name slugs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
