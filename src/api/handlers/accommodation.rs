use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::CreateAccommodationRequest;
use crate::api::extractors::{auth::AuthUser, json::ValidJson, role::HostUser};
use crate::domain::models::accommodation::Accommodation;
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_accommodation(
    State(state): State<Arc<AppState>>,
    HostUser(user): HostUser,
    ValidJson(payload): ValidJson<CreateAccommodationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let accommodation = Accommodation::new(
        payload.name,
        payload.description,
        payload.max_guests as i64,
        payload.city,
        payload.available,
        user.id,
    );

    let created = state.accommodation_repo.create(&accommodation).await?;

    info!("Created accommodation {} in {}", created.id, created.city);

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "id": created.id })),
    ))
}

pub async fn list_own_accommodations(
    State(state): State<Arc<AppState>>,
    HostUser(user): HostUser,
) -> Result<impl IntoResponse, AppError> {
    let listings = state.accommodation_repo.list_by_owner(&user.id).await?;
    Ok(Json(listings))
}

pub async fn list_available_accommodations(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let listings = state.accommodation_repo.list_available().await?;
    Ok(Json(listings))
}
