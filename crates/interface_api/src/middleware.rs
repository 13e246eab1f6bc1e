//! API middleware

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::{info, warn};

use crate::auth::Claims;
use crate::error::ApiError;
use crate::AppState;

/// Authentication middleware
///
/// Validates the bearer token and stores the claims in request extensions
/// for handlers and the admin gate.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) if header.starts_with("Bearer ") => &header[7..],
        _ => {
            warn!("Missing or invalid Authorization header");
            return Err(ApiError::unauthorized());
        }
    };

    match crate::auth::validate_token(token, &state.config.jwt_secret) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(e) => {
            warn!("Token validation failed: {:?}", e);
            Err(ApiError::unauthorized())
        }
    }
}

/// Admin gate for mutating catalog and inventory routes
///
/// Runs after `auth_middleware`, so the claims extension is present.
pub async fn require_admin(request: Request<Body>, next: Next) -> Result<Response, ApiError> {
    let is_admin = request
        .extensions()
        .get::<Claims>()
        .map(Claims::is_admin)
        .unwrap_or(false);

    if !is_admin {
        return Err(ApiError::Forbidden("admin access required".to_string()));
    }

    Ok(next.run(request).await)
}

/// Request logging middleware
///
/// Records method, uri, user, status, and duration for every request.
pub async fn request_logging(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let user = request
        .extensions()
        .get::<Claims>()
        .map(|c| c.sub.clone())
        .unwrap_or_else(|| "anonymous".to_string());

    let start = Utc::now();

    let response = next.run(request).await;

    let duration = Utc::now() - start;
    let status = response.status();

    info!(
        method = %method,
        uri = %uri,
        user = %user,
        status = %status.as_u16(),
        duration_ms = duration.num_milliseconds(),
        "HTTP request"
    );

    response
}
