//! Inventory error types

use thiserror::Error;

use core_kernel::ProductId;
use infra_db::DatabaseError;

/// Errors from inventory ledger operations
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Client-fixable input problem
    #[error("Validation error: {0}")]
    Validation(String),

    /// The product the adjustment targets does not exist
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The adjustment would take the quantity below zero
    #[error(
        "Insufficient stock for product {product_id}: available {available}, requested {requested}"
    )]
    InsufficientStock {
        product_id: ProductId,
        available: i32,
        requested: i32,
    },

    /// Underlying store failure; the adjustment was rolled back
    #[error("Persistence failure: {0}")]
    Persistence(#[from] DatabaseError),
}

impl InventoryError {
    /// Returns true for errors the caller can fix by changing the request
    pub fn is_client_error(&self) -> bool {
        !matches!(self, InventoryError::Persistence(_))
    }
}
