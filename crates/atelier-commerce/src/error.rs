//! Commerce error types.

use thiserror::Error;

/// Errors that can occur at the domain boundary.
///
/// Store mutations themselves never fail: lookups that miss and rejected
/// quantity updates are reported as `bool` no-ops. These errors cover the
/// catalog boundary and explicit validation entry points.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("product not found: {0}")]
    ProductNotFound(String),

    /// A quantity that is zero, negative, or not a number.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Catalog payload could not be decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
