//! Category handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use core_kernel::CategoryId;
use domain_catalog::CategoryView;

use crate::dto::categories::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::error::ApiError;
use crate::AppState;

/// `GET /categories`
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryView>>, ApiError> {
    Ok(Json(state.categories.list().await?))
}

/// `POST /categories` (admin)
pub async fn create_category(
    State(state): State<AppState>,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryView>), ApiError> {
    request.validate()?;
    let category = state.categories.create(&request.name).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// `PUT /categories/{id}` (admin)
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
    Json(request): Json<UpdateCategoryRequest>,
) -> Result<Json<CategoryView>, ApiError> {
    request.validate()?;
    Ok(Json(state.categories.update(id, &request.name).await?))
}

/// `DELETE /categories/{id}` (admin)
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<StatusCode, ApiError> {
    state.categories.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
