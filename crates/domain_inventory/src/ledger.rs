//! The inventory ledger service
//!
//! Adjustments are linearizable per product: the conditional update either
//! lands with the floor intact or reports the quantity that was actually
//! available. A decrement against a product that has never been stocked
//! materializes the zero record first and then fails with `available: 0` -
//! balances can never go negative.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use tracing::info;

use core_kernel::{InventoryId, ProductId};
use infra_db::repositories::inventory::{InventoryRepository, InventoryWithProductRow};
use infra_db::repositories::product::ProductRepository;
use infra_db::DatabaseError;

use crate::error::InventoryError;

/// An inventory record as returned to callers
#[derive(Debug, Clone, Serialize)]
pub struct InventoryView {
    pub id: InventoryId,
    pub product_id: ProductId,
    pub product_name: String,
    pub sku: Option<String>,
    pub qty: i32,
    pub unit: String,
    pub updated_at: DateTime<Utc>,
}

impl From<InventoryWithProductRow> for InventoryView {
    fn from(row: InventoryWithProductRow) -> Self {
        Self {
            id: row.id,
            product_id: row.product_id,
            product_name: row.product_name,
            sku: row.sku,
            qty: row.qty,
            unit: row.unit,
            updated_at: row.updated_at,
        }
    }
}

/// The authoritative owner of per-product stock quantity
#[derive(Debug, Clone)]
pub struct InventoryLedger {
    pool: PgPool,
    inventory: InventoryRepository,
}

impl InventoryLedger {
    pub fn new(pool: PgPool) -> Self {
        Self {
            inventory: InventoryRepository::new(pool.clone()),
            pool,
        }
    }

    /// Lists all inventory records with product details
    pub async fn list(&self) -> Result<Vec<InventoryView>, InventoryError> {
        let rows = self.inventory.list().await?;
        Ok(rows.into_iter().map(InventoryView::from).collect())
    }

    /// Atomically adjusts a product's quantity by a signed delta
    ///
    /// Fails `InsufficientStock` when a negative delta would take the
    /// quantity below zero; the record is left untouched in that case.
    pub async fn adjust_quantity(
        &self,
        product_id: ProductId,
        delta: i32,
    ) -> Result<InventoryView, InventoryError> {
        if delta == 0 {
            return Err(InventoryError::Validation(
                "adjustment delta must be non-zero".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await.map_err(DatabaseError::from)?;

        if ProductRepository::find_ref(&mut *tx, product_id).await?.is_none() {
            return Err(InventoryError::ProductNotFound(product_id));
        }

        match InventoryRepository::try_adjust(&mut *tx, product_id, delta).await? {
            Some(new_qty) => {
                tx.commit().await.map_err(DatabaseError::from)?;
                info!(product_id = %product_id, delta, new_qty, "Inventory adjusted");
            }
            None => {
                let available = InventoryRepository::quantity(&mut *tx, product_id).await?;
                return Err(InventoryError::InsufficientStock {
                    product_id,
                    available,
                    requested: -delta,
                });
            }
        }

        self.view_of(product_id).await
    }

    /// Reads a product's record, lazily materializing it at zero
    ///
    /// Read-only callers must not treat this as a stock-in mechanism; the
    /// materialized record simply pins the quantity at zero.
    pub async fn quantity_of(&self, product_id: ProductId) -> Result<InventoryView, InventoryError> {
        let mut tx = self.pool.begin().await.map_err(DatabaseError::from)?;

        if ProductRepository::find_ref(&mut *tx, product_id).await?.is_none() {
            return Err(InventoryError::ProductNotFound(product_id));
        }

        InventoryRepository::ensure_record(&mut *tx, product_id).await?;
        tx.commit().await.map_err(DatabaseError::from)?;

        self.view_of(product_id).await
    }

    async fn view_of(&self, product_id: ProductId) -> Result<InventoryView, InventoryError> {
        self.inventory
            .find_by_product(product_id)
            .await?
            .map(InventoryView::from)
            .ok_or(InventoryError::ProductNotFound(product_id))
    }
}
