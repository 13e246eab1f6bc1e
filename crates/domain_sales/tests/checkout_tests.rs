//! Checkout integration tests
//!
//! These run against a real PostgreSQL instance in a container. They are
//! ignored by default; run them with `cargo test -- --ignored` on a machine
//! with a local Docker daemon.

use core_kernel::{Money, ProductId, SaleId, UserId};
use domain_sales::{CheckoutError, CheckoutService};
use rust_decimal_macros::dec;
use test_utils::fixtures::{sale_count, seed_cashier, seed_product, stock_of};
use test_utils::{create_isolated_test_database, CheckoutRequestBuilder};

struct Setup {
    _db: test_utils::TestDatabase,
    checkout: CheckoutService,
    pool: sqlx::PgPool,
    cashier: UserId,
}

async fn setup() -> Setup {
    let db = create_isolated_test_database()
        .await
        .expect("failed to start test database");
    let pool = db.pool().clone();
    let cashier = seed_cashier(&pool, "cashier1").await;

    Setup {
        checkout: CheckoutService::new(pool.clone()),
        _db: db,
        pool,
        cashier,
    }
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn checkout_persists_sale_and_decrements_stock() {
    let s = setup().await;
    let product = seed_product(&s.pool, "Cola", "10.00", 10).await;

    let request = CheckoutRequestBuilder::new()
        .item(product, 2, "10.00")
        .paid("20.00")
        .payment_method("cash")
        .build();

    let receipt = s.checkout.checkout(s.cashier, request).await.unwrap();

    assert_eq!(receipt.total_amount, Money::new(dec!(20.00)));
    assert_eq!(receipt.paid_amount, Money::new(dec!(20.00)));
    assert_eq!(receipt.change_amount, Money::new(dec!(0.00)));
    assert!(receipt.invoice_no.starts_with("INV-"));
    assert_eq!(receipt.cashier_name.as_deref(), Some("cashier1"));
    assert_eq!(receipt.items.len(), 1);
    assert_eq!(receipt.items[0].product_name, "Cola");
    assert_eq!(receipt.items[0].subtotal, Money::new(dec!(20.00)));

    assert_eq!(stock_of(&s.pool, product).await, 8);
    assert_eq!(sale_count(&s.pool).await, 1);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn total_equals_sum_of_item_subtotals() {
    let s = setup().await;
    let a = seed_product(&s.pool, "Cola", "10.00", 10).await;
    let b = seed_product(&s.pool, "Chips", "2.99", 10).await;

    let request = CheckoutRequestBuilder::new()
        .item(a, 2, "10.00")
        .item_with_discount(b, 3, "2.99", "0.97")
        .paid("50.00")
        .build();

    let receipt = s.checkout.checkout(s.cashier, request).await.unwrap();

    let item_sum: Money = receipt.items.iter().map(|i| i.subtotal).sum();
    assert_eq!(receipt.total_amount, item_sum);
    assert_eq!(receipt.total_amount, Money::new(dec!(28.00)));
    assert_eq!(receipt.change_amount, Money::new(dec!(22.00)));
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn insufficient_payment_leaves_no_trace() {
    let s = setup().await;
    let product = seed_product(&s.pool, "Cola", "10.00", 10).await;

    let request = CheckoutRequestBuilder::new()
        .item(product, 2, "10.00")
        .paid("15.00")
        .build();

    let err = s.checkout.checkout(s.cashier, request).await.unwrap_err();
    assert!(matches!(err, CheckoutError::InsufficientPayment { .. }));

    assert_eq!(stock_of(&s.pool, product).await, 10);
    assert_eq!(sale_count(&s.pool).await, 0);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn insufficient_stock_reports_available_and_requested() {
    let s = setup().await;
    let product = seed_product(&s.pool, "Cola", "10.00", 5).await;

    let request = CheckoutRequestBuilder::new()
        .item(product, 6, "10.00")
        .paid("60.00")
        .build();

    let err = s.checkout.checkout(s.cashier, request).await.unwrap_err();
    match err {
        CheckoutError::InsufficientStock {
            product_id,
            available,
            requested,
        } => {
            assert_eq!(product_id, product);
            assert_eq!(available, 5);
            assert_eq!(requested, 6);
        }
        other => panic!("expected InsufficientStock, got {other:?}"),
    }

    assert_eq!(stock_of(&s.pool, product).await, 5);
    assert_eq!(sale_count(&s.pool).await, 0);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn failed_line_rolls_back_earlier_decrements() {
    let s = setup().await;
    let stocked = seed_product(&s.pool, "Cola", "10.00", 10).await;
    let depleted = seed_product(&s.pool, "Chips", "2.99", 1).await;

    let request = CheckoutRequestBuilder::new()
        .item(stocked, 2, "10.00")
        .item(depleted, 5, "2.99")
        .paid("100.00")
        .build();

    let err = s.checkout.checkout(s.cashier, request).await.unwrap_err();
    assert!(matches!(err, CheckoutError::InsufficientStock { .. }));

    // The first line's decrement must not survive the abort.
    assert_eq!(stock_of(&s.pool, stocked).await, 10);
    assert_eq!(stock_of(&s.pool, depleted).await, 1);
    assert_eq!(sale_count(&s.pool).await, 0);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn unknown_product_aborts_checkout() {
    let s = setup().await;
    let product = seed_product(&s.pool, "Cola", "10.00", 10).await;

    let request = CheckoutRequestBuilder::new()
        .item(product, 1, "10.00")
        .item(ProductId::new(999_999), 1, "1.00")
        .paid("11.00")
        .build();

    let err = s.checkout.checkout(s.cashier, request).await.unwrap_err();
    assert!(matches!(err, CheckoutError::ProductNotFound(_)));

    assert_eq!(stock_of(&s.pool, product).await, 10);
    assert_eq!(sale_count(&s.pool).await, 0);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn never_stocked_product_fails_with_zero_available() {
    let s = setup().await;
    // Seeded without any inventory record at all.
    let product = seed_product(&s.pool, "Cola", "10.00", 0).await;

    let request = CheckoutRequestBuilder::new()
        .item(product, 1, "10.00")
        .paid("10.00")
        .build();

    let err = s.checkout.checkout(s.cashier, request).await.unwrap_err();
    match err {
        CheckoutError::InsufficientStock { available, .. } => assert_eq!(available, 0),
        other => panic!("expected InsufficientStock, got {other:?}"),
    }
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn get_sale_returns_what_checkout_persisted() {
    let s = setup().await;
    let product = seed_product(&s.pool, "Cola", "10.00", 10).await;

    let request = CheckoutRequestBuilder::new()
        .item_with_discount(product, 3, "10.00", "1.50")
        .paid("30.00")
        .payment_method("card")
        .build();

    let created = s.checkout.checkout(s.cashier, request).await.unwrap();
    let fetched = s.checkout.sale(created.id).await.unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.invoice_no, created.invoice_no);
    assert_eq!(fetched.total_amount, created.total_amount);
    assert_eq!(fetched.paid_amount, created.paid_amount);
    assert_eq!(fetched.change_amount, created.change_amount);
    assert_eq!(fetched.payment_method.as_deref(), Some("card"));
    assert_eq!(fetched.items.len(), created.items.len());
    assert_eq!(fetched.items[0].qty, 3);
    assert_eq!(fetched.items[0].discount, Money::new(dec!(1.50)));
    assert_eq!(fetched.items[0].subtotal, Money::new(dec!(28.50)));
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn get_missing_sale_fails_not_found() {
    let s = setup().await;

    let err = s.checkout.sale(SaleId::new(424242)).await.unwrap_err();
    assert!(matches!(err, CheckoutError::SaleNotFound(_)));
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn list_is_stable_and_newest_first() {
    let s = setup().await;
    let product = seed_product(&s.pool, "Cola", "10.00", 100).await;

    let mut created = Vec::new();
    for _ in 0..3 {
        let request = CheckoutRequestBuilder::new()
            .item(product, 1, "10.00")
            .paid("10.00")
            .build();
        created.push(s.checkout.checkout(s.cashier, request).await.unwrap().id);
    }

    let first = s.checkout.list_sales(50, 0).await.unwrap();
    let second = s.checkout.list_sales(50, 0).await.unwrap();

    let first_ids: Vec<SaleId> = first.iter().map(|r| r.id).collect();
    let second_ids: Vec<SaleId> = second.iter().map(|r| r.id).collect();
    assert_eq!(first_ids, second_ids);

    // Newest first; ids ascend with insertion order here.
    created.reverse();
    assert_eq!(first_ids, created);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn concurrent_checkouts_for_last_stock_have_one_winner() {
    let s = setup().await;
    let product = seed_product(&s.pool, "Cola", "10.00", 3).await;

    let build = || {
        CheckoutRequestBuilder::new()
            .item(product, 3, "10.00")
            .paid("30.00")
            .build()
    };

    let (a, b) = tokio::join!(
        s.checkout.checkout(s.cashier, build()),
        s.checkout.checkout(s.cashier, build()),
    );

    let successes = [a.is_ok(), b.is_ok()].iter().filter(|&&ok| ok).count();
    assert_eq!(successes, 1, "exactly one concurrent checkout may win");

    let loser = if a.is_ok() { b } else { a };
    assert!(matches!(
        loser.unwrap_err(),
        CheckoutError::InsufficientStock { .. }
    ));

    assert_eq!(stock_of(&s.pool, product).await, 0);
    assert_eq!(sale_count(&s.pool).await, 1);
}
