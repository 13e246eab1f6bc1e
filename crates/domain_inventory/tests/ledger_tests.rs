//! Inventory ledger integration tests
//!
//! Ignored by default; run with `cargo test -- --ignored` on a machine with
//! a local Docker daemon.

use core_kernel::ProductId;
use domain_inventory::{InventoryError, InventoryLedger};
use test_utils::create_isolated_test_database;
use test_utils::fixtures::{seed_product, stock_of};

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn adjustment_lazily_creates_record_at_zero() {
    let db = create_isolated_test_database().await.unwrap();
    let pool = db.pool().clone();
    let ledger = InventoryLedger::new(pool.clone());

    // Seeded with no inventory record at all.
    let product = seed_product(&pool, "Cola", "10.00", 0).await;

    let view = ledger.adjust_quantity(product, 5).await.unwrap();
    assert_eq!(view.qty, 5);
    assert_eq!(view.product_name, "Cola");
    assert_eq!(stock_of(&pool, product).await, 5);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn decrement_below_zero_is_refused() {
    let db = create_isolated_test_database().await.unwrap();
    let pool = db.pool().clone();
    let ledger = InventoryLedger::new(pool.clone());

    let product = seed_product(&pool, "Cola", "10.00", 2).await;

    let err = ledger.adjust_quantity(product, -3).await.unwrap_err();
    match err {
        InventoryError::InsufficientStock {
            available,
            requested,
            ..
        } => {
            assert_eq!(available, 2);
            assert_eq!(requested, 3);
        }
        other => panic!("expected InsufficientStock, got {other:?}"),
    }

    assert_eq!(stock_of(&pool, product).await, 2);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn decrement_to_exactly_zero_is_allowed() {
    let db = create_isolated_test_database().await.unwrap();
    let pool = db.pool().clone();
    let ledger = InventoryLedger::new(pool.clone());

    let product = seed_product(&pool, "Cola", "10.00", 2).await;

    let view = ledger.adjust_quantity(product, -2).await.unwrap();
    assert_eq!(view.qty, 0);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn zero_delta_is_rejected() {
    let db = create_isolated_test_database().await.unwrap();
    let pool = db.pool().clone();
    let ledger = InventoryLedger::new(pool.clone());

    let product = seed_product(&pool, "Cola", "10.00", 2).await;

    let err = ledger.adjust_quantity(product, 0).await.unwrap_err();
    assert!(matches!(err, InventoryError::Validation(_)));
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn unknown_product_is_not_found() {
    let db = create_isolated_test_database().await.unwrap();
    let ledger = InventoryLedger::new(db.pool().clone());

    let err = ledger
        .adjust_quantity(ProductId::new(999_999), 5)
        .await
        .unwrap_err();
    assert!(matches!(err, InventoryError::ProductNotFound(_)));
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn read_materializes_zero_record() {
    let db = create_isolated_test_database().await.unwrap();
    let pool = db.pool().clone();
    let ledger = InventoryLedger::new(pool.clone());

    let product = seed_product(&pool, "Cola", "10.00", 0).await;

    let view = ledger.quantity_of(product).await.unwrap();
    assert_eq!(view.qty, 0);

    // The record now exists, pinned at zero.
    let listed = ledger.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].qty, 0);
}
