//! API error handling
//!
//! Domain error kinds map to status codes here - never by parsing message
//! text. The response body is always `{"error": "..."}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_catalog::CatalogError;
use domain_inventory::InventoryError;
use domain_sales::CheckoutError;
use infra_db::DatabaseError;

use crate::auth::AuthError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn unauthorized() -> Self {
        ApiError::Unauthorized("unauthorized".to_string())
    }

    pub fn invalid_credentials() -> Self {
        ApiError::Unauthorized("invalid credentials".to_string())
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        if err.is_client_error() {
            ApiError::BadRequest(err.to_string())
        } else if err.is_not_found() {
            ApiError::NotFound(err.to_string())
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match &err {
            CatalogError::Validation(_) => ApiError::BadRequest(err.to_string()),
            CatalogError::CategoryNotFound(_) | CatalogError::ProductNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            CatalogError::Conflict(_) => ApiError::Conflict(err.to_string()),
            CatalogError::Persistence(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<InventoryError> for ApiError {
    fn from(err: InventoryError) -> Self {
        match &err {
            InventoryError::Validation(_) | InventoryError::InsufficientStock { .. } => {
                ApiError::BadRequest(err.to_string())
            }
            InventoryError::ProductNotFound(_) => ApiError::NotFound(err.to_string()),
            InventoryError::Persistence(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Unauthorized(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{Money, ProductId, SaleId};
    use rust_decimal_macros::dec;

    #[test]
    fn test_insufficient_payment_maps_to_400() {
        let err: ApiError = CheckoutError::InsufficientPayment {
            total: Money::new(dec!(20.00)),
            paid: Money::new(dec!(15.00)),
        }
        .into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_insufficient_stock_maps_to_400() {
        let err: ApiError = CheckoutError::InsufficientStock {
            product_id: ProductId::new(1),
            available: 5,
            requested: 6,
        }
        .into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_sale_not_found_maps_to_404() {
        let err: ApiError = CheckoutError::SaleNotFound(SaleId::new(7)).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_persistence_maps_to_500() {
        let err: ApiError =
            CheckoutError::Persistence(DatabaseError::PoolExhausted).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_catalog_conflict_maps_to_409() {
        let err: ApiError = CatalogError::Conflict("duplicate sku".to_string()).into();
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }
}
