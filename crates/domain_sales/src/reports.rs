//! Sales reporting
//!
//! Aggregation reads over committed sales. These tolerate the store's
//! default read consistency - a report racing a checkout may miss the very
//! latest commit, which is acceptable for reporting-style access.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::PgPool;

use core_kernel::{Money, ProductId};
use infra_db::repositories::report::{
    ReportRepository, SalesByDateRow, SalesStatsRow, TopProductRow,
};
use infra_db::DatabaseError;

/// Sales totals for one calendar date
#[derive(Debug, Clone, Serialize)]
pub struct DailySales {
    pub sale_date: NaiveDate,
    pub total_transactions: i64,
    pub total_revenue: Money,
}

impl From<SalesByDateRow> for DailySales {
    fn from(row: SalesByDateRow) -> Self {
        Self {
            sale_date: row.sale_date,
            total_transactions: row.total_transactions,
            total_revenue: row.total_revenue,
        }
    }
}

/// A product ranked by units sold
#[derive(Debug, Clone, Serialize)]
pub struct TopProduct {
    pub product_id: ProductId,
    pub product_name: String,
    pub sku: Option<String>,
    pub total_qty_sold: i64,
    pub total_revenue: Money,
}

impl From<TopProductRow> for TopProduct {
    fn from(row: TopProductRow) -> Self {
        Self {
            product_id: row.product_id,
            product_name: row.product_name,
            sku: row.sku,
            total_qty_sold: row.total_qty_sold,
            total_revenue: row.total_revenue,
        }
    }
}

/// Aggregate sales statistics for a period
#[derive(Debug, Clone, Serialize)]
pub struct SalesStats {
    pub total_sales: i64,
    pub total_revenue: Money,
    pub avg_sale_amount: Money,
}

impl From<SalesStatsRow> for SalesStats {
    fn from(row: SalesStatsRow) -> Self {
        Self {
            total_sales: row.total_sales,
            total_revenue: row.total_revenue,
            avg_sale_amount: row.avg_sale_amount,
        }
    }
}

/// Application service for sales reports
#[derive(Debug, Clone)]
pub struct ReportService {
    reports: ReportRepository,
}

impl ReportService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            reports: ReportRepository::new(pool),
        }
    }

    /// Sales grouped by calendar date, inclusive of both bounds
    pub async fn sales_by_date(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<DailySales>, DatabaseError> {
        let rows = self.reports.sales_by_date(from, to).await?;
        Ok(rows.into_iter().map(DailySales::from).collect())
    }

    /// Products ranked by quantity sold
    pub async fn top_products(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<TopProduct>, DatabaseError> {
        let rows = self.reports.top_products(from, to, limit).await?;
        Ok(rows.into_iter().map(TopProduct::from).collect())
    }

    /// Count, revenue, and average sale amount for the period
    pub async fn sales_stats(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<SalesStats, DatabaseError> {
        let row = self.reports.sales_stats(from, to).await?;
        Ok(row.into())
    }
}
