//! Login endpoint and bearer-token middleware

use axum::{
    body::Body,
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::{LoginRequest, LoginResponse};
use crate::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let token = state
        .auth
        .login(&req.password)
        .await
        .ok_or_else(|| ApiError::Unauthorized("Wrong password".to_string()))?;

    Ok(Json(LoginResponse { token }))
}

/// Auth middleware - checks the bearer token minted by login
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response> {
    // Skip auth for the login endpoint and health check
    let path = request.uri().path();
    if path == "/api/auth/login" || path == "/health" {
        return Ok(next.run(request).await);
    }

    // Without a configured password the whole API is open
    if !state.auth.enabled() {
        return Ok(next.run(request).await);
    }

    // Extract Bearer token
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized("Invalid Authorization format".to_string()))?;

    if !state.auth.verify(token).await {
        return Err(ApiError::Unauthorized("Invalid token".to_string()));
    }

    Ok(next.run(request).await)
}
