//! Product handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use core_kernel::ProductId;
use domain_catalog::ProductView;

use crate::dto::products::{CreateProductRequest, SearchQuery, UpdateProductRequest};
use crate::error::ApiError;
use crate::AppState;

/// `GET /products`
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductView>>, ApiError> {
    Ok(Json(state.products.list().await?))
}

/// `GET /products/search?q=`
pub async fn search_products(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<ProductView>>, ApiError> {
    Ok(Json(state.products.search(&query.q).await?))
}

/// `GET /products/{id}`
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<ProductView>, ApiError> {
    Ok(Json(state.products.get(id).await?))
}

/// `POST /products` (admin)
pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductView>), ApiError> {
    request.validate()?;
    let product = state.products.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// `PUT /products/{id}` (admin)
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(request): Json<UpdateProductRequest>,
) -> Result<Json<ProductView>, ApiError> {
    request.validate()?;
    Ok(Json(state.products.update(id, request.into()).await?))
}

/// `DELETE /products/{id}` (admin)
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<StatusCode, ApiError> {
    state.products.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
