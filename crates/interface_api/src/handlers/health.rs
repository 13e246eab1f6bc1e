//! Health handlers

use axum::{extract::State, Json};
use serde_json::{json, Value};

use infra_db::DatabaseError;

use crate::error::ApiError;
use crate::AppState;

/// Liveness probe
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Readiness probe - verifies database connectivity
pub async fn readiness_check(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    sqlx::query("SELECT 1")
        .execute(&state.pool)
        .await
        .map_err(DatabaseError::from)?;

    Ok(Json(json!({ "status": "ready" })))
}
