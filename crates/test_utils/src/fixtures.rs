//! Seed helpers for integration tests

use sqlx::PgPool;

use core_kernel::{Money, ProductId, UserId};
use infra_db::repositories::product::NewProduct;
use infra_db::repositories::{ProductRepository, UserRepository};

/// Placeholder hash for seeded users; login is not exercised through these
const DUMMY_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$seedonly$seedonly";

/// Seeds a cashier account and returns its id
pub async fn seed_cashier(pool: &PgPool, username: &str) -> UserId {
    UserRepository::new(pool.clone())
        .create(username, DUMMY_PASSWORD_HASH, "cashier")
        .await
        .expect("failed to seed cashier")
        .id
}

/// Seeds a product with the given price and initial stock, returns its id
pub async fn seed_product(pool: &PgPool, name: &str, price: &str, stock: i32) -> ProductId {
    let product = NewProduct {
        sku: None,
        name: name.to_string(),
        category_id: None,
        price: Money::new(price.parse().expect("valid price")),
        cost_price: None,
        unit: "pcs".to_string(),
    };

    let repo = ProductRepository::new(pool.clone());
    let row = if stock > 0 {
        repo.create_with_initial_stock(&product, stock).await
    } else {
        repo.create(&product).await
    }
    .expect("failed to seed product");

    row.id
}

/// Reads the current stock quantity for a product, 0 if no record exists
pub async fn stock_of(pool: &PgPool, product_id: ProductId) -> i32 {
    sqlx::query_scalar::<_, i32>("SELECT COALESCE((SELECT qty FROM inventory WHERE product_id = $1), 0)")
        .bind(product_id)
        .fetch_one(pool)
        .await
        .expect("failed to read stock")
}

/// Counts the persisted sales
pub async fn sale_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sales")
        .fetch_one(pool)
        .await
        .expect("failed to count sales")
}
