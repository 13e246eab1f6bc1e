//! Category repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use core_kernel::CategoryId;

use crate::error::DatabaseError;

/// Database row for a category
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CategoryRow {
    pub id: CategoryId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Repository for category records
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists all categories ordered by name
    pub async fn list(&self) -> Result<Vec<CategoryRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, created_at
            FROM categories
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Finds a category by id
    pub async fn find_by_id(&self, id: CategoryId) -> Result<Option<CategoryRow>, DatabaseError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, created_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Inserts a new category
    pub async fn create(&self, name: &str) -> Result<CategoryRow, DatabaseError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            INSERT INTO categories (name)
            VALUES ($1)
            RETURNING id, name, created_at
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Renames a category, returning None if it does not exist
    pub async fn update(
        &self,
        id: CategoryId,
        name: &str,
    ) -> Result<Option<CategoryRow>, DatabaseError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            UPDATE categories
            SET name = $2
            WHERE id = $1
            RETURNING id, name, created_at
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Deletes a category; products keep existing via ON DELETE SET NULL
    pub async fn delete(&self, id: CategoryId) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
