//! Sale repository
//!
//! Sales are immutable once created: there is no update or delete path. The
//! insert functions only accept a caller-owned connection because a sale
//! header and its items must always be written inside the checkout
//! transaction, never standalone. Read paths join the cashier username and
//! product details so receipts can be assembled without extra round trips.

use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};
use tracing::debug;

use core_kernel::{Money, ProductId, SaleId, SaleItemId, UserId};

use crate::error::DatabaseError;

/// Data for inserting a sale header
#[derive(Debug, Clone)]
pub struct NewSale {
    pub invoice_no: String,
    pub user_id: UserId,
    pub total_amount: Money,
    pub paid_amount: Money,
    pub change_amount: Money,
    pub payment_method: Option<String>,
}

/// Data for inserting a sale line item
#[derive(Debug, Clone)]
pub struct NewSaleItem {
    pub product_id: ProductId,
    pub qty: i32,
    pub price: Money,
    pub discount: Money,
    pub subtotal: Money,
}

/// Sale header row joined with the cashier username
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SaleRow {
    pub id: SaleId,
    pub invoice_no: String,
    pub user_id: Option<UserId>,
    pub cashier_name: Option<String>,
    pub total_amount: Money,
    pub paid_amount: Money,
    pub change_amount: Money,
    pub payment_method: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Sale item row joined with product name and SKU
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SaleItemRow {
    pub id: SaleItemId,
    pub sale_id: SaleId,
    pub product_id: Option<ProductId>,
    pub product_name: String,
    pub sku: Option<String>,
    pub qty: i32,
    pub price: Money,
    pub discount: Money,
    pub subtotal: Money,
}

const SALE_WITH_CASHIER: &str = r#"
    SELECT s.id, s.invoice_no, s.user_id, u.username AS cashier_name,
           s.total_amount, s.paid_amount, s.change_amount, s.payment_method,
           s.created_at
    FROM sales s
    LEFT JOIN users u ON u.id = s.user_id
"#;

/// Repository for sale headers and line items
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: PgPool,
}

impl SaleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Finds a sale by id, with the cashier username
    pub async fn find_by_id(&self, id: SaleId) -> Result<Option<SaleRow>, DatabaseError> {
        let row = sqlx::query_as::<_, SaleRow>(&format!("{SALE_WITH_CASHIER} WHERE s.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// Loads the line items of a sale in insertion order
    pub async fn items_for(&self, sale_id: SaleId) -> Result<Vec<SaleItemRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, SaleItemRow>(
            r#"
            SELECT i.id, i.sale_id, i.product_id,
                   COALESCE(p.name, '') AS product_name, p.sku,
                   i.qty, i.price, i.discount, i.subtotal
            FROM sale_items i
            LEFT JOIN products p ON p.id = i.product_id
            WHERE i.sale_id = $1
            ORDER BY i.id
            "#,
        )
        .bind(sale_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Lists sales newest first, with id as a stable tie-break
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<SaleRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, SaleRow>(&format!(
            "{SALE_WITH_CASHIER} ORDER BY s.created_at DESC, s.id DESC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Lists sales created between two timestamps, inclusive of both bounds
    pub async fn list_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<SaleRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, SaleRow>(&format!(
            "{SALE_WITH_CASHIER} WHERE s.created_at BETWEEN $1 AND $2 \
             ORDER BY s.created_at DESC, s.id DESC"
        ))
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Inserts a sale header inside a caller-owned transaction
    ///
    /// Returns the assigned id and creation timestamp. A unique violation on
    /// `invoice_no` surfaces as `DatabaseError::DuplicateEntry`, which the
    /// orchestrator handles by retrying with a fresh invoice number.
    pub async fn insert_sale(
        conn: &mut PgConnection,
        sale: &NewSale,
    ) -> Result<(SaleId, DateTime<Utc>), DatabaseError> {
        debug!(invoice_no = %sale.invoice_no, "Inserting sale header");

        let (id, created_at) = sqlx::query_as::<_, (SaleId, DateTime<Utc>)>(
            r#"
            INSERT INTO sales (invoice_no, user_id, total_amount, paid_amount,
                               change_amount, payment_method)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, created_at
            "#,
        )
        .bind(&sale.invoice_no)
        .bind(sale.user_id)
        .bind(sale.total_amount)
        .bind(sale.paid_amount)
        .bind(sale.change_amount)
        .bind(&sale.payment_method)
        .fetch_one(&mut *conn)
        .await?;

        Ok((id, created_at))
    }

    /// Inserts a sale line item inside a caller-owned transaction
    pub async fn insert_item(
        conn: &mut PgConnection,
        sale_id: SaleId,
        item: &NewSaleItem,
    ) -> Result<SaleItemId, DatabaseError> {
        let id = sqlx::query_scalar::<_, SaleItemId>(
            r#"
            INSERT INTO sale_items (sale_id, product_id, qty, price, discount, subtotal)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(sale_id)
        .bind(item.product_id)
        .bind(item.qty)
        .bind(item.price)
        .bind(item.discount)
        .bind(item.subtotal)
        .fetch_one(&mut *conn)
        .await?;

        Ok(id)
    }
}
