//! Product directory
//!
//! Products carry the catalog price checkout lines reference and the
//! name/sku/unit used to enrich receipts and inventory listings. Creation
//! can seed an initial stock level; the product row and its inventory row
//! are then written in one transaction.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use tracing::info;

use core_kernel::{CategoryId, Money, ProductId};
use infra_db::repositories::category::CategoryRepository;
use infra_db::repositories::product::{
    NewProduct, ProductRepository, ProductRow, ProductWithCategoryRow,
};
use infra_db::DatabaseError;

use crate::error::CatalogError;

/// Default unit of measure when the caller does not supply one
const DEFAULT_UNIT: &str = "pcs";

/// A product as returned to callers, with its category name resolved
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
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

impl From<ProductWithCategoryRow> for ProductView {
    fn from(row: ProductWithCategoryRow) -> Self {
        Self {
            id: row.id,
            sku: row.sku,
            name: row.name,
            category_id: row.category_id,
            category_name: row.category_name,
            price: row.price,
            cost_price: row.cost_price,
            unit: row.unit,
            created_at: row.created_at,
        }
    }
}

impl ProductView {
    fn from_row(row: ProductRow, category_name: Option<String>) -> Self {
        Self {
            id: row.id,
            sku: row.sku,
            name: row.name,
            category_id: row.category_id,
            category_name,
            price: row.price,
            cost_price: row.cost_price,
            unit: row.unit,
            created_at: row.created_at,
        }
    }
}

/// Input for creating a product
#[derive(Debug, Clone)]
pub struct NewProductInput {
    pub sku: Option<String>,
    pub name: String,
    pub category_id: Option<CategoryId>,
    pub price: Money,
    pub cost_price: Option<Money>,
    pub unit: Option<String>,
    pub initial_stock: Option<i32>,
}

/// Input for updating a product
#[derive(Debug, Clone)]
pub struct UpdateProductInput {
    pub sku: Option<String>,
    pub name: String,
    pub category_id: Option<CategoryId>,
    pub price: Money,
    pub cost_price: Option<Money>,
    pub unit: Option<String>,
}

/// Application service for the product directory
#[derive(Debug, Clone)]
pub struct ProductService {
    products: ProductRepository,
    categories: CategoryRepository,
}

impl ProductService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            products: ProductRepository::new(pool.clone()),
            categories: CategoryRepository::new(pool),
        }
    }

    pub async fn get(&self, id: ProductId) -> Result<ProductView, CatalogError> {
        let row = self
            .products
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::ProductNotFound(id))?;
        Ok(row.into())
    }

    pub async fn list(&self) -> Result<Vec<ProductView>, CatalogError> {
        let rows = self.products.list().await?;
        Ok(rows.into_iter().map(ProductView::from).collect())
    }

    pub async fn search(&self, query: &str) -> Result<Vec<ProductView>, CatalogError> {
        let rows = self.products.search(query).await?;
        Ok(rows.into_iter().map(ProductView::from).collect())
    }

    pub async fn create(&self, input: NewProductInput) -> Result<ProductView, CatalogError> {
        validate_name_and_price(&input.name, input.price, input.cost_price)?;
        if let Some(stock) = input.initial_stock {
            if stock < 0 {
                return Err(CatalogError::validation("initial stock cannot be negative"));
            }
        }

        let category_name = self.resolve_category(input.category_id).await?;

        let record = NewProduct {
            sku: normalize_sku(input.sku),
            name: input.name.trim().to_string(),
            category_id: input.category_id,
            price: input.price,
            cost_price: input.cost_price,
            unit: normalize_unit(input.unit),
        };

        let row = match input.initial_stock {
            Some(stock) if stock > 0 => {
                self.products
                    .create_with_initial_stock(&record, stock)
                    .await
            }
            _ => self.products.create(&record).await,
        }
        .map_err(conflict_on_duplicate)?;

        info!(product_id = %row.id, name = %row.name, "Product created");
        Ok(ProductView::from_row(row, category_name))
    }

    pub async fn update(
        &self,
        id: ProductId,
        input: UpdateProductInput,
    ) -> Result<ProductView, CatalogError> {
        validate_name_and_price(&input.name, input.price, input.cost_price)?;

        let category_name = self.resolve_category(input.category_id).await?;

        let record = NewProduct {
            sku: normalize_sku(input.sku),
            name: input.name.trim().to_string(),
            category_id: input.category_id,
            price: input.price,
            cost_price: input.cost_price,
            unit: normalize_unit(input.unit),
        };

        let row = self
            .products
            .update(id, &record)
            .await
            .map_err(conflict_on_duplicate)?
            .ok_or(CatalogError::ProductNotFound(id))?;

        Ok(ProductView::from_row(row, category_name))
    }

    pub async fn delete(&self, id: ProductId) -> Result<(), CatalogError> {
        if !self.products.delete(id).await? {
            return Err(CatalogError::ProductNotFound(id));
        }
        Ok(())
    }

    /// Validates the referenced category exists and returns its name
    async fn resolve_category(
        &self,
        category_id: Option<CategoryId>,
    ) -> Result<Option<String>, CatalogError> {
        match category_id {
            None => Ok(None),
            Some(id) => {
                let row = self
                    .categories
                    .find_by_id(id)
                    .await?
                    .ok_or(CatalogError::CategoryNotFound(id))?;
                Ok(Some(row.name))
            }
        }
    }
}

fn validate_name_and_price(
    name: &str,
    price: Money,
    cost_price: Option<Money>,
) -> Result<(), CatalogError> {
    if name.trim().is_empty() {
        return Err(CatalogError::validation("product name is required"));
    }
    if price.is_negative() {
        return Err(CatalogError::validation("price cannot be negative"));
    }
    if cost_price.is_some_and(|c| c.is_negative()) {
        return Err(CatalogError::validation("cost price cannot be negative"));
    }
    Ok(())
}

fn normalize_sku(sku: Option<String>) -> Option<String> {
    sku.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn normalize_unit(unit: Option<String>) -> String {
    unit.map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| DEFAULT_UNIT.to_string())
}

fn conflict_on_duplicate(err: DatabaseError) -> CatalogError {
    if err.is_duplicate() {
        CatalogError::Conflict("a product with this SKU already exists".to_string())
    } else {
        CatalogError::Persistence(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_rejects_empty_name() {
        let err = validate_name_and_price("  ", Money::new(dec!(1.00)), None).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let err = validate_name_and_price("Cola", Money::new(dec!(-0.01)), None).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[test]
    fn test_validate_accepts_zero_price() {
        assert!(validate_name_and_price("Sample", Money::zero(), None).is_ok());
    }

    #[test]
    fn test_unit_defaults_to_pcs() {
        assert_eq!(normalize_unit(None), "pcs");
        assert_eq!(normalize_unit(Some("".to_string())), "pcs");
        assert_eq!(normalize_unit(Some("box".to_string())), "box");
    }

    #[test]
    fn test_blank_sku_becomes_none() {
        assert_eq!(normalize_sku(Some("  ".to_string())), None);
        assert_eq!(normalize_sku(Some("SKU-1".to_string())), Some("SKU-1".to_string()));
    }
}
