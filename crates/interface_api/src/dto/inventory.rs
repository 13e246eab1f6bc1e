//! Inventory DTOs

use serde::Deserialize;

use core_kernel::ProductId;

/// Body of `POST /inventory/adjust`
///
/// `delta` is signed: positive for stock-in, negative for corrections.
#[derive(Debug, Deserialize)]
pub struct AdjustInventoryRequest {
    pub product_id: ProductId,
    pub delta: i32,
    /// Free-form note kept in the request log only
    pub reason: Option<String>,
}
