//! Sales handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use validator::Validate;

use core_kernel::SaleId;
use domain_sales::SaleReceipt;

use crate::auth::Claims;
use crate::dto::reports::resolve_range;
use crate::dto::sales::{CreateSaleRequest, ListSalesQuery};
use crate::error::ApiError;
use crate::AppState;

/// Default page size for `GET /sales`
const DEFAULT_LIMIT: i64 = 50;

/// `POST /sales` - checkout
///
/// The authenticated user is the cashier of record. Responds 201 with the
/// enriched receipt; insufficient payment or stock comes back as 400 with
/// the offending detail, unknown products as 404.
pub async fn create_sale(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<CreateSaleRequest>,
) -> Result<(StatusCode, Json<SaleReceipt>), ApiError> {
    request.validate()?;

    let cashier_id = claims.user_id()?;
    let receipt = state.checkout.checkout(cashier_id, request.into()).await?;

    Ok((StatusCode::CREATED, Json(receipt)))
}

/// `GET /sales/{id}`
pub async fn get_sale(
    State(state): State<AppState>,
    Path(id): Path<SaleId>,
) -> Result<Json<SaleReceipt>, ApiError> {
    let receipt = state.checkout.sale(id).await?;
    Ok(Json(receipt))
}

/// `GET /sales` - newest first
///
/// Pages with `limit`/`offset` (defaults 50/0); passing `from`/`to` lists
/// the inclusive date range instead.
pub async fn list_sales(
    State(state): State<AppState>,
    Query(query): Query<ListSalesQuery>,
) -> Result<Json<Vec<SaleReceipt>>, ApiError> {
    if query.from.is_some() || query.to.is_some() {
        let (from, to) = resolve_range(query.from, query.to);
        let receipts = state.checkout.sales_between(from, to).await?;
        return Ok(Json(receipts));
    }

    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).max(0);
    let offset = query.offset.unwrap_or(0).max(0);

    let receipts = state.checkout.list_sales(limit, offset).await?;
    Ok(Json(receipts))
}
