//! Catalog error types

use thiserror::Error;

use core_kernel::{CategoryId, ProductId};
use infra_db::DatabaseError;

/// Errors from catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Client-fixable input problem (empty name, negative price)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced category does not exist
    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// Referenced product does not exist
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Unique constraint conflict (duplicate SKU)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Underlying store failure
    #[error("Persistence failure: {0}")]
    Persistence(#[from] DatabaseError),
}

impl CatalogError {
    pub fn validation(message: impl Into<String>) -> Self {
        CatalogError::Validation(message.into())
    }

    /// Returns true for errors the caller can fix by changing the request
    pub fn is_client_error(&self) -> bool {
        !matches!(self, CatalogError::Persistence(_))
    }
}
