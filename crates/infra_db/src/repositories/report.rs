//! Reporting queries over sales
//!
//! Pure aggregate reads; no locking beyond the store's default read
//! consistency. Aggregates are cast back to NUMERIC(12, 2) so every revenue
//! figure stays a two-place amount.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use core_kernel::{Money, ProductId};

use crate::error::DatabaseError;

/// Daily sales totals
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SalesByDateRow {
    pub sale_date: NaiveDate,
    pub total_transactions: i64,
    pub total_revenue: Money,
}

/// A product ranked by units sold
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TopProductRow {
    pub product_id: ProductId,
    pub product_name: String,
    pub sku: Option<String>,
    pub total_qty_sold: i64,
    pub total_revenue: Money,
}

/// Aggregate sales statistics for a period
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SalesStatsRow {
    pub total_sales: i64,
    pub total_revenue: Money,
    pub avg_sale_amount: Money,
}

/// Repository for sales reporting
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Sales grouped by calendar date within the period, inclusive
    pub async fn sales_by_date(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<SalesByDateRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, SalesByDateRow>(
            r#"
            SELECT created_at::date AS sale_date,
                   COUNT(*) AS total_transactions,
                   COALESCE(SUM(total_amount), 0)::NUMERIC(12, 2) AS total_revenue
            FROM sales
            WHERE created_at BETWEEN $1 AND $2
            GROUP BY created_at::date
            ORDER BY sale_date
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Products ranked by quantity sold within the period
    pub async fn top_products(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<TopProductRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, TopProductRow>(
            r#"
            SELECT p.id AS product_id, p.name AS product_name, p.sku,
                   COALESCE(SUM(i.qty), 0)::BIGINT AS total_qty_sold,
                   COALESCE(SUM(i.subtotal), 0)::NUMERIC(12, 2) AS total_revenue
            FROM sale_items i
            JOIN products p ON p.id = i.product_id
            JOIN sales s ON s.id = i.sale_id
            WHERE s.created_at BETWEEN $1 AND $2
            GROUP BY p.id, p.name, p.sku
            ORDER BY total_qty_sold DESC, p.id
            LIMIT $3
            "#,
        )
        .bind(from)
        .bind(to)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Count, revenue, and average sale amount for the period
    pub async fn sales_stats(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<SalesStatsRow, DatabaseError> {
        let row = sqlx::query_as::<_, SalesStatsRow>(
            r#"
            SELECT COUNT(*) AS total_sales,
                   COALESCE(SUM(total_amount), 0)::NUMERIC(12, 2) AS total_revenue,
                   COALESCE(AVG(total_amount), 0)::NUMERIC(12, 2) AS avg_sale_amount
            FROM sales
            WHERE created_at BETWEEN $1 AND $2
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}
