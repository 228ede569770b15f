//! Users service routes

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State, rejection::BytesRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use tracing::{error, warn};

use crate::{
    error::{ApiError, ApiResult},
    models::NewUser,
    state::AppState,
};

/// Create the router for the users service
///
/// Methods not listed for a path are answered with 405 by the router. `HEAD`
/// is refused explicitly on `/users` since `get` would otherwise accept it.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/users",
            get(list_users).post(create_user).head(method_not_allowed),
        )
        .route("/users/:id", get(get_user))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "users-service"
    }))
}

async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

/// List active users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let users = state.user_service.list_active_users().await.map_err(|e| {
        error!("Failed to list users: {}", e);
        ApiError::listing(e)
    })?;

    Ok(Json(users))
}

/// Create a new user
///
/// The body is decoded as JSON whatever the declared content type. A body
/// that cannot be read, including one over the size limit, is treated the
/// same as malformed JSON.
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<impl IntoResponse> {
    let body = body.map_err(|e| {
        warn!("Failed to read user payload: {}", e);
        ApiError::InvalidJson
    })?;

    let payload: NewUser = serde_json::from_slice(&body).map_err(|e| {
        warn!("Rejected user payload: {}", e);
        ApiError::InvalidJson
    })?;

    let user = state.user_service.create_user(payload).await.map_err(|e| {
        error!("Failed to create user: {}", e);
        ApiError::creation(e)
    })?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let user = state.user_service.find_user_by_id(id).await.map_err(|e| {
        if !e.is_not_found() {
            error!("Failed to get user: {}", e);
        }
        ApiError::lookup(e)
    })?;

    Ok(Json(user))
}
