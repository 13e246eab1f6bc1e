//! Inventory repository - the storage primitive of the inventory ledger
//!
//! Per-product on-hand quantity lives in a single row keyed by product id.
//! All mutation goes through [`InventoryRepository::try_adjust`]: one
//! conditional UPDATE whose row-level lock serializes concurrent adjustments
//! on the same product. Two checkouts racing for the last unit of stock can
//! never both succeed — the loser's WHERE clause no longer holds and it
//! observes a definitive "insufficient" outcome.
//!
//! Records are materialized lazily at qty 0 the first time a product is
//! adjusted or read.

use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};
use tracing::debug;

use core_kernel::{InventoryId, ProductId};

use crate::error::DatabaseError;

/// Database row for an inventory record
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InventoryRow {
    pub id: InventoryId,
    pub product_id: ProductId,
    pub qty: i32,
    pub updated_at: DateTime<Utc>,
}

/// Inventory row joined with product details for listings
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InventoryWithProductRow {
    pub id: InventoryId,
    pub product_id: ProductId,
    pub product_name: String,
    pub sku: Option<String>,
    pub unit: String,
    pub qty: i32,
    pub updated_at: DateTime<Utc>,
}

/// Repository for inventory records
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    pool: PgPool,
}

impl InventoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists all inventory records with product details
    pub async fn list(&self) -> Result<Vec<InventoryWithProductRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, InventoryWithProductRow>(
            r#"
            SELECT i.id, i.product_id, p.name AS product_name, p.sku, p.unit,
                   i.qty, i.updated_at
            FROM inventory i
            JOIN products p ON p.id = i.product_id
            ORDER BY p.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Finds the inventory record for a product, with product details
    pub async fn find_by_product(
        &self,
        product_id: ProductId,
    ) -> Result<Option<InventoryWithProductRow>, DatabaseError> {
        let row = sqlx::query_as::<_, InventoryWithProductRow>(
            r#"
            SELECT i.id, i.product_id, p.name AS product_name, p.sku, p.unit,
                   i.qty, i.updated_at
            FROM inventory i
            JOIN products p ON p.id = i.product_id
            WHERE i.product_id = $1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Materializes the zero record for a product if none exists yet
    pub async fn ensure_record(
        conn: &mut PgConnection,
        product_id: ProductId,
    ) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO inventory (product_id, qty)
            VALUES ($1, 0)
            ON CONFLICT (product_id) DO NOTHING
            "#,
        )
        .bind(product_id)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    /// Atomically adjusts a product's quantity, refusing to go below zero
    ///
    /// Returns the new quantity, or `None` when the adjustment would take
    /// the quantity negative — in which case the row is left untouched. The
    /// condition and the update are one statement, so no interleaving of
    /// concurrent callers can observe a stale quantity and oversell.
    pub async fn try_adjust(
        conn: &mut PgConnection,
        product_id: ProductId,
        delta: i32,
    ) -> Result<Option<i32>, DatabaseError> {
        Self::ensure_record(conn, product_id).await?;

        let new_qty = sqlx::query_scalar::<_, i32>(
            r#"
            UPDATE inventory
            SET qty = qty + $2, updated_at = now()
            WHERE product_id = $1 AND qty + $2 >= 0
            RETURNING qty
            "#,
        )
        .bind(product_id)
        .bind(delta)
        .fetch_optional(&mut *conn)
        .await?;

        debug!(product_id = %product_id, delta, new_qty = ?new_qty, "Inventory adjustment");
        Ok(new_qty)
    }

    /// Reads a product's quantity, materializing the zero record if absent
    pub async fn quantity(
        conn: &mut PgConnection,
        product_id: ProductId,
    ) -> Result<i32, DatabaseError> {
        Self::ensure_record(conn, product_id).await?;

        let qty = sqlx::query_scalar::<_, i32>(
            "SELECT qty FROM inventory WHERE product_id = $1",
        )
        .bind(product_id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(qty)
    }
}
