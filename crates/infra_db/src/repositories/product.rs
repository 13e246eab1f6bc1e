//! Product repository
//!
//! Products are the catalog entries checkout resolves against. The read
//! queries join the category name so responses can be built without a
//! second round trip; `find_ref` is the transaction-scoped resolution used
//! inside the checkout unit of work.

use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};

use core_kernel::{CategoryId, Money, ProductId};

use crate::error::DatabaseError;

/// Database row for a product
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRow {
    pub id: ProductId,
    pub sku: Option<String>,
    pub name: String,
    pub category_id: Option<CategoryId>,
    pub price: Money,
    pub cost_price: Option<Money>,
    pub unit: String,
    pub created_at: DateTime<Utc>,
}

/// Product row joined with its category name
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductWithCategoryRow {
    pub id: ProductId,
    pub sku: Option<String>,
    pub name: String,
    pub category_id: Option<CategoryId>,
    pub category_name: Option<String>,
    pub price: Money,
    pub cost_price: Option<Money>,
    pub unit: String,
    pub created_at: DateTime<Utc>,
}

/// The slice of a product checkout needs for enrichment
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRef {
    pub id: ProductId,
    pub name: String,
    pub sku: Option<String>,
    pub unit: String,
}

/// Data for inserting or updating a product
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub sku: Option<String>,
    pub name: String,
    pub category_id: Option<CategoryId>,
    pub price: Money,
    pub cost_price: Option<Money>,
    pub unit: String,
}

const PRODUCT_WITH_CATEGORY: &str = r#"
    SELECT p.id, p.sku, p.name, p.category_id, c.name AS category_name,
           p.price, p.cost_price, p.unit, p.created_at
    FROM products p
    LEFT JOIN categories c ON c.id = p.category_id
"#;

/// Repository for product records
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Finds a product by id, with its category name
    pub async fn find_by_id(
        &self,
        id: ProductId,
    ) -> Result<Option<ProductWithCategoryRow>, DatabaseError> {
        let row = sqlx::query_as::<_, ProductWithCategoryRow>(&format!(
            "{PRODUCT_WITH_CATEGORY} WHERE p.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Lists all products ordered by name
    pub async fn list(&self) -> Result<Vec<ProductWithCategoryRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, ProductWithCategoryRow>(&format!(
            "{PRODUCT_WITH_CATEGORY} ORDER BY p.name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Searches products by name or SKU, case-insensitively
    pub async fn search(&self, query: &str) -> Result<Vec<ProductWithCategoryRow>, DatabaseError> {
        let pattern = format!("%{}%", query);
        let rows = sqlx::query_as::<_, ProductWithCategoryRow>(&format!(
            "{PRODUCT_WITH_CATEGORY} WHERE p.name ILIKE $1 OR p.sku ILIKE $1 ORDER BY p.name"
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Inserts a new product
    pub async fn create(&self, product: &NewProduct) -> Result<ProductRow, DatabaseError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (sku, name, category_id, price, cost_price, unit)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, sku, name, category_id, price, cost_price, unit, created_at
            "#,
        )
        .bind(&product.sku)
        .bind(&product.name)
        .bind(product.category_id)
        .bind(product.price)
        .bind(product.cost_price)
        .bind(&product.unit)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Inserts a product and seeds its inventory record in one transaction
    ///
    /// Either both rows exist afterwards or neither does.
    pub async fn create_with_initial_stock(
        &self,
        product: &NewProduct,
        initial_qty: i32,
    ) -> Result<ProductRow, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (sku, name, category_id, price, cost_price, unit)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, sku, name, category_id, price, cost_price, unit, created_at
            "#,
        )
        .bind(&product.sku)
        .bind(&product.name)
        .bind(product.category_id)
        .bind(product.price)
        .bind(product.cost_price)
        .bind(&product.unit)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO inventory (product_id, qty) VALUES ($1, $2)")
            .bind(row.id)
            .bind(initial_qty)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row)
    }

    /// Updates a product, returning None if it does not exist
    pub async fn update(
        &self,
        id: ProductId,
        product: &NewProduct,
    ) -> Result<Option<ProductRow>, DatabaseError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products
            SET sku = $2, name = $3, category_id = $4, price = $5, cost_price = $6, unit = $7
            WHERE id = $1
            RETURNING id, sku, name, category_id, price, cost_price, unit, created_at
            "#,
        )
        .bind(id)
        .bind(&product.sku)
        .bind(&product.name)
        .bind(product.category_id)
        .bind(product.price)
        .bind(product.cost_price)
        .bind(&product.unit)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Deletes a product; its inventory row cascades away
    pub async fn delete(&self, id: ProductId) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Resolves a product inside a caller-owned transaction
    ///
    /// Checkout uses this for existence checks and receipt enrichment; the
    /// read happens under the same transaction as the stock decrements.
    pub async fn find_ref(
        conn: &mut PgConnection,
        id: ProductId,
    ) -> Result<Option<ProductRef>, DatabaseError> {
        let row = sqlx::query_as::<_, ProductRef>(
            r#"
            SELECT id, name, sku, unit
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row)
    }
}
