//! Fluent builders for test data

use rust_decimal::Decimal;

use core_kernel::{Money, ProductId};
use domain_sales::{CheckoutLine, CheckoutRequest};

/// Builds checkout requests for tests
///
/// ```rust
/// use test_utils::CheckoutRequestBuilder;
/// use core_kernel::ProductId;
///
/// let request = CheckoutRequestBuilder::new()
///     .item(ProductId::new(1), 2, "10.00")
///     .paid("20.00")
///     .build();
/// assert_eq!(request.items.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct CheckoutRequestBuilder {
    items: Vec<CheckoutLine>,
    paid_amount: Money,
    payment_method: Option<String>,
}

impl CheckoutRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a line with no discount
    pub fn item(self, product_id: ProductId, qty: i32, price: &str) -> Self {
        self.item_with_discount(product_id, qty, price, "0.00")
    }

    /// Adds a line with a discount
    pub fn item_with_discount(
        mut self,
        product_id: ProductId,
        qty: i32,
        price: &str,
        discount: &str,
    ) -> Self {
        self.items.push(CheckoutLine {
            product_id,
            qty,
            price: Money::new(parse_decimal(price)),
            discount: Money::new(parse_decimal(discount)),
        });
        self
    }

    /// Sets the paid amount
    pub fn paid(mut self, amount: &str) -> Self {
        self.paid_amount = Money::new(parse_decimal(amount));
        self
    }

    /// Sets the payment method label
    pub fn payment_method(mut self, method: &str) -> Self {
        self.payment_method = Some(method.to_string());
        self
    }

    pub fn build(self) -> CheckoutRequest {
        CheckoutRequest {
            items: self.items,
            paid_amount: self.paid_amount,
            payment_method: self.payment_method,
        }
    }
}

fn parse_decimal(s: &str) -> Decimal {
    s.parse().expect("test amounts must be valid decimals")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builder_assembles_request() {
        let request = CheckoutRequestBuilder::new()
            .item(ProductId::new(1), 2, "10.00")
            .item_with_discount(ProductId::new(2), 1, "5.00", "0.50")
            .paid("25.00")
            .payment_method("cash")
            .build();

        assert_eq!(request.items.len(), 2);
        assert_eq!(request.paid_amount, Money::new(dec!(25.00)));
        assert_eq!(request.items[1].discount, Money::new(dec!(0.50)));
        assert_eq!(request.payment_method.as_deref(), Some("cash"));
    }
}
