//! The checkout orchestrator
//!
//! Converts a cart of items plus payment into a persisted sale and the
//! corresponding inventory decrements, all inside one unit of work:
//!
//! 1. Validate the request and compute the total. Insufficient payment is
//!    rejected before any side effect.
//! 2. Open a transaction. For every line: resolve the product, then
//!    conditionally decrement its stock. A missing product or a decrement
//!    that would cross the zero floor aborts the whole transaction.
//! 3. Insert the sale header and its line items, resolve the cashier name,
//!    and commit.
//!
//! Invoice numbers are random tokens whose uniqueness the database
//! enforces; a collision rolls the transaction back and the whole attempt
//! runs again with a fresh token, a bounded number of times. A failed
//! attempt leaves no trace, so retrying is always safe.

use sqlx::PgPool;
use tracing::{info, warn};

use core_kernel::{Money, ProductId, SaleId, UserId};
use infra_db::repositories::inventory::InventoryRepository;
use infra_db::repositories::product::ProductRepository;
use infra_db::repositories::sale::{NewSale, NewSaleItem, SaleRepository};
use infra_db::repositories::user::UserRepository;
use infra_db::DatabaseError;

use crate::error::CheckoutError;
use crate::invoice::generate_invoice_no;
use crate::receipt::{ReceiptItem, SaleReceipt};

/// Bound on invoice-collision retries before giving up
const INVOICE_ATTEMPTS: u32 = 3;

/// A checkout request: the cart plus payment
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub items: Vec<CheckoutLine>,
    pub paid_amount: Money,
    pub payment_method: Option<String>,
}

/// One cart line
#[derive(Debug, Clone)]
pub struct CheckoutLine {
    pub product_id: ProductId,
    pub qty: i32,
    pub price: Money,
    pub discount: Money,
}

/// Validates a checkout request's lines
///
/// Rejects an empty cart, non-positive quantities, negative prices or
/// discounts, and discounts exceeding the line amount (a stored subtotal is
/// never negative).
pub fn validate_request(request: &CheckoutRequest) -> Result<(), CheckoutError> {
    if request.items.is_empty() {
        return Err(CheckoutError::validation("item list must not be empty"));
    }

    for line in &request.items {
        if line.qty <= 0 {
            return Err(CheckoutError::validation(format!(
                "quantity for product {} must be positive",
                line.product_id
            )));
        }
        if line.price.is_negative() {
            return Err(CheckoutError::validation(format!(
                "price for product {} cannot be negative",
                line.product_id
            )));
        }
        if line.discount.is_negative() {
            return Err(CheckoutError::validation(format!(
                "discount for product {} cannot be negative",
                line.product_id
            )));
        }
        if line.discount > line_amount(line)? {
            return Err(CheckoutError::validation(format!(
                "discount for product {} exceeds the line amount",
                line.product_id
            )));
        }
    }

    Ok(())
}

/// Computes the total of a cart: `Σ (price * qty - discount)`
pub fn compute_total(items: &[CheckoutLine]) -> Result<Money, CheckoutError> {
    items.iter().try_fold(Money::zero(), |acc, line| {
        acc.checked_add(line_subtotal(line)?)
            .map_err(|_| CheckoutError::validation("total amount overflow"))
    })
}

/// One line's subtotal: `price * qty - discount`
fn line_subtotal(line: &CheckoutLine) -> Result<Money, CheckoutError> {
    line_amount(line)?
        .checked_sub(line.discount)
        .map_err(|_| CheckoutError::validation("line subtotal overflow"))
}

fn line_amount(line: &CheckoutLine) -> Result<Money, CheckoutError> {
    line.price
        .checked_mul_qty(line.qty)
        .map_err(|_| CheckoutError::validation("line amount overflow"))
}

/// Orchestrates checkout and the sale read paths
#[derive(Debug, Clone)]
pub struct CheckoutService {
    pool: PgPool,
    sales: SaleRepository,
}

impl CheckoutService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            sales: SaleRepository::new(pool.clone()),
            pool,
        }
    }

    /// Converts a cart plus payment into a persisted sale
    ///
    /// On success, inventory for each listed product has decreased by its
    /// requested quantity and exactly one new sale with its items exists.
    /// On any failure the state is identical to before the call.
    pub async fn checkout(
        &self,
        cashier_id: UserId,
        request: CheckoutRequest,
    ) -> Result<SaleReceipt, CheckoutError> {
        validate_request(&request)?;

        let total = compute_total(&request.items)?;
        if request.paid_amount < total {
            return Err(CheckoutError::InsufficientPayment {
                total,
                paid: request.paid_amount,
            });
        }
        let change = request.paid_amount - total;

        for attempt in 1..=INVOICE_ATTEMPTS {
            let invoice_no = generate_invoice_no();
            match self
                .attempt_checkout(cashier_id, &request, total, change, &invoice_no)
                .await
            {
                Err(CheckoutError::Persistence(e)) if e.is_duplicate() => {
                    warn!(invoice_no = %invoice_no, attempt, "Invoice number collision, retrying");
                }
                outcome => return outcome,
            }
        }

        Err(CheckoutError::Persistence(DatabaseError::DuplicateEntry(
            format!("invoice number collided {} times in a row", INVOICE_ATTEMPTS),
        )))
    }

    /// One complete checkout transaction under a given invoice number
    async fn attempt_checkout(
        &self,
        cashier_id: UserId,
        request: &CheckoutRequest,
        total: Money,
        change: Money,
        invoice_no: &str,
    ) -> Result<SaleReceipt, CheckoutError> {
        let mut tx = self.pool.begin().await.map_err(DatabaseError::from)?;

        // Resolve every product and take its stock before writing anything.
        let mut resolved = Vec::with_capacity(request.items.len());
        for line in &request.items {
            let product = ProductRepository::find_ref(&mut *tx, line.product_id)
                .await?
                .ok_or(CheckoutError::ProductNotFound(line.product_id))?;

            if InventoryRepository::try_adjust(&mut *tx, line.product_id, -line.qty)
                .await?
                .is_none()
            {
                let available = InventoryRepository::quantity(&mut *tx, line.product_id).await?;
                return Err(CheckoutError::InsufficientStock {
                    product_id: line.product_id,
                    available,
                    requested: line.qty,
                });
            }

            resolved.push(product);
        }

        let (sale_id, created_at) = SaleRepository::insert_sale(
            &mut *tx,
            &NewSale {
                invoice_no: invoice_no.to_string(),
                user_id: cashier_id,
                total_amount: total,
                paid_amount: request.paid_amount,
                change_amount: change,
                payment_method: request.payment_method.clone(),
            },
        )
        .await?;

        let mut items = Vec::with_capacity(request.items.len());
        for (line, product) in request.items.iter().zip(&resolved) {
            let subtotal = line_subtotal(line)?;
            let item_id = SaleRepository::insert_item(
                &mut *tx,
                sale_id,
                &NewSaleItem {
                    product_id: line.product_id,
                    qty: line.qty,
                    price: line.price,
                    discount: line.discount,
                    subtotal,
                },
            )
            .await?;

            items.push(ReceiptItem {
                id: item_id,
                product_id: Some(line.product_id),
                product_name: product.name.clone(),
                sku: product.sku.clone(),
                qty: line.qty,
                price: line.price,
                discount: line.discount,
                subtotal,
            });
        }

        let cashier_name = UserRepository::username_of(&mut *tx, cashier_id).await?;

        tx.commit().await.map_err(DatabaseError::from)?;

        info!(
            sale_id = %sale_id,
            invoice_no = %invoice_no,
            total = %total,
            items = items.len(),
            "Checkout committed"
        );

        Ok(SaleReceipt {
            id: sale_id,
            invoice_no: invoice_no.to_string(),
            user_id: Some(cashier_id),
            cashier_name,
            total_amount: total,
            paid_amount: request.paid_amount,
            change_amount: change,
            payment_method: request.payment_method.clone(),
            items,
            created_at,
        })
    }

    /// Loads a sale with its items
    pub async fn sale(&self, id: SaleId) -> Result<SaleReceipt, CheckoutError> {
        let sale = self
            .sales
            .find_by_id(id)
            .await?
            .ok_or(CheckoutError::SaleNotFound(id))?;
        let items = self.sales.items_for(id).await?;

        Ok(SaleReceipt::from_rows(sale, items))
    }

    /// Lists sales newest first with their items
    pub async fn list_sales(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<SaleReceipt>, CheckoutError> {
        let sales = self.sales.list(limit, offset).await?;
        self.with_items(sales).await
    }

    /// Lists sales created within an inclusive timestamp range
    pub async fn sales_between(
        &self,
        from: chrono::DateTime<chrono::Utc>,
        to: chrono::DateTime<chrono::Utc>,
    ) -> Result<Vec<SaleReceipt>, CheckoutError> {
        let sales = self.sales.list_between(from, to).await?;
        self.with_items(sales).await
    }

    async fn with_items(
        &self,
        sales: Vec<infra_db::repositories::sale::SaleRow>,
    ) -> Result<Vec<SaleReceipt>, CheckoutError> {
        let mut receipts = Vec::with_capacity(sales.len());
        for sale in sales {
            let items = self.sales.items_for(sale.id).await?;
            receipts.push(SaleReceipt::from_rows(sale, items));
        }
        Ok(receipts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn line(product_id: i64, qty: i32, price: &str, discount: &str) -> CheckoutLine {
        CheckoutLine {
            product_id: ProductId::new(product_id),
            qty,
            price: Money::new(price.parse().unwrap()),
            discount: Money::new(discount.parse().unwrap()),
        }
    }

    fn request(items: Vec<CheckoutLine>, paid: &str) -> CheckoutRequest {
        CheckoutRequest {
            items,
            paid_amount: Money::new(paid.parse().unwrap()),
            payment_method: Some("cash".to_string()),
        }
    }

    #[test]
    fn test_empty_cart_rejected() {
        let err = validate_request(&request(vec![], "10.00")).unwrap_err();
        assert!(matches!(err, CheckoutError::Validation(_)));
    }

    #[test]
    fn test_non_positive_qty_rejected() {
        let err =
            validate_request(&request(vec![line(1, 0, "10.00", "0.00")], "10.00")).unwrap_err();
        assert!(matches!(err, CheckoutError::Validation(_)));

        let err =
            validate_request(&request(vec![line(1, -2, "10.00", "0.00")], "10.00")).unwrap_err();
        assert!(matches!(err, CheckoutError::Validation(_)));
    }

    #[test]
    fn test_negative_price_and_discount_rejected() {
        let err =
            validate_request(&request(vec![line(1, 1, "-1.00", "0.00")], "10.00")).unwrap_err();
        assert!(matches!(err, CheckoutError::Validation(_)));

        let err =
            validate_request(&request(vec![line(1, 1, "1.00", "-0.50")], "10.00")).unwrap_err();
        assert!(matches!(err, CheckoutError::Validation(_)));
    }

    #[test]
    fn test_discount_exceeding_line_amount_rejected() {
        // 2 x 3.00 = 6.00, discount 6.01 would make the subtotal negative
        let err =
            validate_request(&request(vec![line(1, 2, "3.00", "6.01")], "10.00")).unwrap_err();
        assert!(matches!(err, CheckoutError::Validation(_)));

        // discount equal to the line amount is allowed
        assert!(validate_request(&request(vec![line(1, 2, "3.00", "6.00")], "10.00")).is_ok());
    }

    #[test]
    fn test_total_of_single_line() {
        let total = compute_total(&[line(1, 2, "10.00", "0.00")]).unwrap();
        assert_eq!(total.amount(), dec!(20.00));
    }

    #[test]
    fn test_total_sums_lines_and_applies_discounts() {
        let total = compute_total(&[
            line(1, 2, "10.00", "0.00"),
            line(2, 3, "2.99", "0.97"),
            line(3, 1, "0.01", "0.00"),
        ])
        .unwrap();
        // 20.00 + (8.97 - 0.97) + 0.01
        assert_eq!(total.amount(), dec!(28.01));
    }

    #[test]
    fn test_subtotal_invariant_holds_per_line() {
        let l = line(1, 3, "2.50", "1.00");
        let subtotal = line_subtotal(&l).unwrap();
        assert_eq!(subtotal.amount(), dec!(6.50));

        let total = compute_total(std::slice::from_ref(&l)).unwrap();
        assert_eq!(total, subtotal);
    }
}
