//! Sales DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{Money, ProductId};
use domain_sales::{CheckoutLine, CheckoutRequest};

/// Body of `POST /sales`
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSaleRequest {
    #[validate(length(min = 1, message = "items must not be empty"), nested)]
    pub items: Vec<SaleItemRequest>,
    pub paid_amount: Decimal,
    pub payment_method: Option<String>,
}

/// One cart line of a checkout request
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct SaleItemRequest {
    pub product_id: ProductId,
    #[validate(range(min = 1, message = "qty must be positive"))]
    pub qty: i32,
    pub price: Decimal,
    #[serde(default)]
    pub discount: Decimal,
}

impl From<CreateSaleRequest> for CheckoutRequest {
    fn from(request: CreateSaleRequest) -> Self {
        CheckoutRequest {
            items: request
                .items
                .into_iter()
                .map(|item| CheckoutLine {
                    product_id: item.product_id,
                    qty: item.qty,
                    price: Money::new(item.price),
                    discount: Money::new(item.discount),
                })
                .collect(),
            paid_amount: Money::new(request.paid_amount),
            payment_method: request
                .payment_method
                .filter(|m| !m.trim().is_empty()),
        }
    }
}

/// Query parameters of `GET /sales`
///
/// `limit`/`offset` page through all sales; passing `from`/`to` switches to
/// the inclusive date-range listing instead.
#[derive(Debug, Deserialize)]
pub struct ListSalesQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use validator::Validate;

    fn sample() -> CreateSaleRequest {
        serde_json::from_value(serde_json::json!({
            "items": [{"product_id": 1, "qty": 2, "price": "10.00", "discount": "0.00"}],
            "paid_amount": "20.00",
            "payment_method": "cash"
        }))
        .unwrap()
    }

    #[test]
    fn test_deserializes_decimal_strings() {
        let request = sample();
        assert_eq!(request.paid_amount, dec!(20.00));
        assert_eq!(request.items[0].price, dec!(10.00));
    }

    #[test]
    fn test_discount_defaults_to_zero() {
        let request: CreateSaleRequest = serde_json::from_value(serde_json::json!({
            "items": [{"product_id": 1, "qty": 1, "price": "5.00"}],
            "paid_amount": "5.00"
        }))
        .unwrap();
        assert_eq!(request.items[0].discount, Decimal::ZERO);
    }

    #[test]
    fn test_empty_items_fail_validation() {
        let request: CreateSaleRequest = serde_json::from_value(serde_json::json!({
            "items": [],
            "paid_amount": "5.00"
        }))
        .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_zero_qty_fails_validation() {
        let request: CreateSaleRequest = serde_json::from_value(serde_json::json!({
            "items": [{"product_id": 1, "qty": 0, "price": "5.00"}],
            "paid_amount": "5.00"
        }))
        .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_conversion_to_checkout_request() {
        let checkout: CheckoutRequest = sample().into();
        assert_eq!(checkout.items.len(), 1);
        assert_eq!(checkout.items[0].product_id, ProductId::new(1));
        assert_eq!(checkout.paid_amount, Money::new(dec!(20.00)));
        assert_eq!(checkout.payment_method.as_deref(), Some("cash"));
    }
}
