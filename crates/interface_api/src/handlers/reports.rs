//! Report handlers

use axum::extract::{Query, State};
use axum::Json;

use domain_sales::{DailySales, SalesStats, TopProduct};

use crate::dto::reports::{resolve_range, DateRangeQuery, TopProductsQuery};
use crate::error::ApiError;
use crate::AppState;

/// Default number of products in the top-products ranking
const DEFAULT_TOP_LIMIT: i64 = 10;

/// `GET /reports/sales?from=&to=`
pub async fn sales_by_date(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> Result<Json<Vec<DailySales>>, ApiError> {
    let (from, to) = resolve_range(query.from, query.to);
    Ok(Json(state.reports.sales_by_date(from, to).await?))
}

/// `GET /reports/top-products?from=&to=&limit=`
pub async fn top_products(
    State(state): State<AppState>,
    Query(query): Query<TopProductsQuery>,
) -> Result<Json<Vec<TopProduct>>, ApiError> {
    let (from, to) = resolve_range(query.from, query.to);
    let limit = query.limit.unwrap_or(DEFAULT_TOP_LIMIT).max(1);
    Ok(Json(state.reports.top_products(from, to, limit).await?))
}

/// `GET /reports/stats?from=&to=`
pub async fn sales_stats(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> Result<Json<SalesStats>, ApiError> {
    let (from, to) = resolve_range(query.from, query.to);
    Ok(Json(state.reports.sales_stats(from, to).await?))
}
