//! Integration tests for the Money type

use core_kernel::{Money, MoneyError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_line_subtotal_arithmetic() {
    // qty 2 at 10.00 with no discount
    let price = Money::new(dec!(10.00));
    let subtotal = price.checked_mul_qty(2).unwrap() - Money::zero();
    assert_eq!(subtotal.amount(), dec!(20.00));
}

#[test]
fn test_change_computation() {
    let total = Money::new(dec!(20.00));
    let paid = Money::new(dec!(50.00));
    assert_eq!((paid - total).amount(), dec!(30.00));
}

#[test]
fn test_discount_subtraction() {
    let price = Money::new(dec!(10.00));
    let discount = Money::new(dec!(1.50));
    let subtotal = price.checked_mul_qty(3).unwrap() - discount;
    assert_eq!(subtotal.amount(), dec!(28.50));
}

#[test]
fn test_sum_of_subtotals() {
    let subtotals = vec![
        Money::new(dec!(20.00)),
        Money::new(dec!(8.97)),
        Money::new(dec!(0.03)),
    ];
    let total: Money = subtotals.into_iter().sum();
    assert_eq!(total.amount(), dec!(29.00));
}

#[test]
fn test_checked_mul_overflow() {
    let huge = Money::new(Decimal::MAX);
    assert_eq!(huge.checked_mul_qty(1000), Err(MoneyError::Overflow));
}

#[test]
fn test_comparison_after_normalization() {
    // 10.0 and 10.00 normalize to the same two-place value
    assert_eq!(Money::new(dec!(10.0)), Money::new(dec!(10.00)));
    assert!(Money::new(dec!(10.01)) > Money::new(dec!(10.00)));
}
