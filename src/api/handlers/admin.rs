use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::UpdateUserRequest;
use crate::api::dtos::responses::UserResponse;
use crate::api::extractors::{json::ValidJson, role::AdminUser};
use crate::api::handlers::user::apply_user_update;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_users(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let users = state.user_repo.list().await?;
    let safe: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(safe))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .user_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    Ok(Json(UserResponse::from(user)))
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let updated = apply_user_update(&state, &id, payload).await?;
    info!("Admin updated user {}", updated.id);
    Ok(Json(UserResponse::from(updated)))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let target = state
        .user_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    state.user_repo.delete(&target.id).await?;

    info!("Admin deleted user {}", id);

    Ok(StatusCode::NO_CONTENT)
}
