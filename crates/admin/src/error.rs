//! Admin operation errors.

use thiserror::Error;
use threadloom_core::ProductId;

/// Errors from admin catalog operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Submitted form is missing a required field or has an invalid value.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No product with the given ID in the working copy.
    #[error("Product not found: {0}")]
    NotFound(ProductId),
}
