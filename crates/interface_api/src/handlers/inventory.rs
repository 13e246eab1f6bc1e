//! Inventory handlers

use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use core_kernel::ProductId;
use domain_inventory::InventoryView;

use crate::dto::inventory::AdjustInventoryRequest;
use crate::error::ApiError;
use crate::AppState;

/// `GET /inventory`
pub async fn list_inventory(
    State(state): State<AppState>,
) -> Result<Json<Vec<InventoryView>>, ApiError> {
    Ok(Json(state.inventory.list().await?))
}

/// `GET /inventory/{product_id}`
pub async fn get_inventory(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> Result<Json<InventoryView>, ApiError> {
    Ok(Json(state.inventory.quantity_of(product_id).await?))
}

/// `POST /inventory/adjust` (admin)
///
/// Manual stock-in or correction. Funnels through the same atomic primitive
/// checkout decrements use, so a correction can never push stock negative.
pub async fn adjust_inventory(
    State(state): State<AppState>,
    Json(request): Json<AdjustInventoryRequest>,
) -> Result<Json<InventoryView>, ApiError> {
    if let Some(reason) = &request.reason {
        info!(product_id = %request.product_id, delta = request.delta, reason = %reason,
            "Manual inventory adjustment");
    }

    let view = state
        .inventory
        .adjust_quantity(request.product_id, request.delta)
        .await?;

    Ok(Json(view))
}
