//! Auth handlers

use axum::{extract::State, Json};
use tracing::info;
use validator::Validate;

use crate::auth::{create_token, verify_password};
use crate::dto::auth::{LoginRequest, LoginResponse, UserInfo};
use crate::error::ApiError;
use crate::AppState;

/// Authenticates a user and issues a bearer token
///
/// Unknown usernames and wrong passwords produce the same response, so the
/// endpoint does not leak which accounts exist.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    request.validate()?;

    let user = state
        .users
        .find_by_username(&request.username)
        .await?
        .ok_or_else(ApiError::invalid_credentials)?;

    if !verify_password(&request.password, &user.password_hash) {
        return Err(ApiError::invalid_credentials());
    }

    let token = create_token(
        user.id,
        &user.username,
        &user.role,
        &state.config.jwt_secret,
        state.config.jwt_expiration_secs,
    )?;

    info!(user_id = %user.id, username = %user.username, "User logged in");

    Ok(Json(LoginResponse {
        access_token: token,
        user: UserInfo {
            id: user.id,
            username: user.username,
            role: user.role,
        },
    }))
}
