//! Sale receipts
//!
//! The enriched response shape for a persisted sale: header fields plus the
//! ordered line items with resolved product name and SKU. Conversions from
//! the repository rows are explicit per entity.

use chrono::{DateTime, Utc};
use serde::Serialize;

use core_kernel::{Money, ProductId, SaleId, SaleItemId, UserId};
use infra_db::repositories::sale::{SaleItemRow, SaleRow};

/// A persisted sale with its line items
#[derive(Debug, Clone, Serialize)]
pub struct SaleReceipt {
    pub id: SaleId,
    pub invoice_no: String,
    pub user_id: Option<UserId>,
    pub cashier_name: Option<String>,
    pub total_amount: Money,
    pub paid_amount: Money,
    pub change_amount: Money,
    pub payment_method: Option<String>,
    pub items: Vec<ReceiptItem>,
    pub created_at: DateTime<Utc>,
}

/// A sale line item with resolved product details
#[derive(Debug, Clone, Serialize)]
pub struct ReceiptItem {
    pub id: SaleItemId,
    pub product_id: Option<ProductId>,
    pub product_name: String,
    pub sku: Option<String>,
    pub qty: i32,
    pub price: Money,
    pub discount: Money,
    pub subtotal: Money,
}

impl SaleReceipt {
    /// Assembles a receipt from a sale header row and its item rows
    pub fn from_rows(sale: SaleRow, items: Vec<SaleItemRow>) -> Self {
        Self {
            id: sale.id,
            invoice_no: sale.invoice_no,
            user_id: sale.user_id,
            cashier_name: sale.cashier_name,
            total_amount: sale.total_amount,
            paid_amount: sale.paid_amount,
            change_amount: sale.change_amount,
            payment_method: sale.payment_method,
            items: items.into_iter().map(ReceiptItem::from).collect(),
            created_at: sale.created_at,
        }
    }
}

impl From<SaleItemRow> for ReceiptItem {
    fn from(row: SaleItemRow) -> Self {
        Self {
            id: row.id,
            product_id: row.product_id,
            product_name: row.product_name,
            sku: row.sku,
            qty: row.qty,
            price: row.price,
            discount: row.discount,
            subtotal: row.subtotal,
        }
    }
}
