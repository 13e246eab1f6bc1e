//! Checkout error taxonomy
//!
//! Callers switch on these kinds - the transport layer maps them straight
//! to status codes without re-deriving anything from message text. Lower
//! layer failures keep their kind; the orchestrator only adds the offending
//! product context.

use thiserror::Error;

use core_kernel::{Money, ProductId, SaleId};
use infra_db::DatabaseError;

/// Errors from checkout and sale read operations
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Client-fixable input problem: empty item list, non-positive
    /// quantity, negative price or discount
    #[error("Validation error: {0}")]
    Validation(String),

    /// The payment does not cover the total; nothing was persisted
    #[error("paid amount {paid} is less than total amount {total}")]
    InsufficientPayment { total: Money, paid: Money },

    /// A requested quantity exceeds what is on hand; the whole checkout
    /// was rolled back
    #[error(
        "Insufficient stock for product {product_id}: available {available}, requested {requested}"
    )]
    InsufficientStock {
        product_id: ProductId,
        available: i32,
        requested: i32,
    },

    /// A line item references a product that does not exist
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The requested sale does not exist
    #[error("Sale not found: {0}")]
    SaleNotFound(SaleId),

    /// Transient store failure; the unit of work is guaranteed rolled
    /// back, so the whole checkout may be retried
    #[error("Persistence failure: {0}")]
    Persistence(#[from] DatabaseError),
}

impl CheckoutError {
    pub fn validation(message: impl Into<String>) -> Self {
        CheckoutError::Validation(message.into())
    }

    /// Returns true for deterministic, client-fixable failures (400-class)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CheckoutError::Validation(_)
                | CheckoutError::InsufficientPayment { .. }
                | CheckoutError::InsufficientStock { .. }
        )
    }

    /// Returns true for absent-entity failures (404-class)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CheckoutError::ProductNotFound(_) | CheckoutError::SaleNotFound(_)
        )
    }
}
