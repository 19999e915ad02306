use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{LoginRequest, RegisterRequest, UpdateUserRequest};
use crate::api::dtos::responses::{AuthResponse, UserResponse};
use crate::api::extractors::{auth::AuthUser, json::ValidJson};
use crate::domain::models::user::User;
use crate::domain::services::auth_service::hash_password;
use crate::error::AppError;
use crate::state::AppState;

pub async fn register(
    State(state): State<Arc<AppState>>,
    ValidJson(payload): ValidJson<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    if state.user_repo.find_by_email(&payload.email).await?.is_some() {
        return Err(AppError::Validation("Email is already registered".to_string()));
    }

    let password_hash = hash_password(&payload.password)?;
    let user = User::new(payload.name, payload.email, password_hash);
    let created = state.user_repo.create(&user).await?;

    // The token comes straight from the freshly created identity; there is
    // no second round through the credential verifier.
    let access_token = state.auth_service.issue_token(&created)?;

    info!("Registered user: {}", created.id);

    Ok((StatusCode::CREATED, Json(AuthResponse { access_token })))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidJson(payload): ValidJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .auth_service
        .verify_credentials(&payload.email, &payload.password)
        .await?;

    let access_token = state.auth_service.issue_token(&user)?;

    info!("User logged in: {}", user.id);

    Ok(Json(AuthResponse { access_token }))
}

pub async fn get_me(AuthUser(user): AuthUser) -> Result<impl IntoResponse, AppError> {
    Ok(Json(UserResponse::from(user)))
}

pub async fn update_me(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    ValidJson(payload): ValidJson<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let updated = apply_user_update(&state, &user.id, payload).await?;
    Ok(Json(UserResponse::from(updated)))
}

pub async fn delete_me(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    state.user_repo.delete(&user.id).await?;
    info!("User deleted own account: {}", user.id);
    Ok(StatusCode::NO_CONTENT)
}

/// Partial update shared by the self and admin paths. Validation is re-run
/// against the changed fields; an email change must stay unique.
pub async fn apply_user_update(
    state: &AppState,
    id: &str,
    payload: UpdateUserRequest,
) -> Result<User, AppError> {
    let mut user = state
        .user_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    if let Some(email) = payload.email {
        if email != user.email && state.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Validation("Email is already registered".to_string()));
        }
        user.email = email;
    }
    if let Some(name) = payload.name {
        user.name = name;
    }
    if let Some(password) = payload.password {
        user.password_hash = hash_password(&password)?;
    }
    if let Some(role) = payload.role {
        user.role = role;
    }
    user.updated_at = Utc::now();

    state.user_repo.update(&user).await
}
