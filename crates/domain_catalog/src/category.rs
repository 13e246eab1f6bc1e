//! Category management

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

use core_kernel::CategoryId;
use infra_db::repositories::category::{CategoryRepository, CategoryRow};

use crate::error::CatalogError;

/// A category as returned to callers
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub id: CategoryId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<CategoryRow> for CategoryView {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
        }
    }
}

/// Application service for category CRUD
#[derive(Debug, Clone)]
pub struct CategoryService {
    categories: CategoryRepository,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            categories: CategoryRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<CategoryView>, CatalogError> {
        let rows = self.categories.list().await?;
        Ok(rows.into_iter().map(CategoryView::from).collect())
    }

    pub async fn create(&self, name: &str) -> Result<CategoryView, CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::validation("category name is required"));
        }

        let row = self.categories.create(name).await?;
        Ok(row.into())
    }

    pub async fn update(&self, id: CategoryId, name: &str) -> Result<CategoryView, CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::validation("category name is required"));
        }

        let row = self
            .categories
            .update(id, name)
            .await?
            .ok_or(CatalogError::CategoryNotFound(id))?;
        Ok(row.into())
    }

    /// Deletes a category; its products fall back to "uncategorized"
    pub async fn delete(&self, id: CategoryId) -> Result<(), CatalogError> {
        if !self.categories.delete(id).await? {
            return Err(CatalogError::CategoryNotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_view_from_row() {
        let row = CategoryRow {
            id: CategoryId::new(3),
            name: "Beverages".to_string(),
            created_at: Utc::now(),
        };
        let view = CategoryView::from(row);
        assert_eq!(view.id, CategoryId::new(3));
        assert_eq!(view.name, "Beverages");
    }
}
