use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::api::dtos::responses::CitiesResponse;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_cities(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let listings = state.accommodation_repo.list_all().await?;

    // Distinct cities in first-seen order among stored listings.
    let mut cities: Vec<String> = Vec::new();
    for listing in listings {
        if !cities.contains(&listing.city) {
            cities.push(listing.city);
        }
    }

    Ok(Json(CitiesResponse { cities }))
}

pub async fn list_by_city(
    State(state): State<Arc<AppState>>,
    Path(city): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let listings = state.accommodation_repo.list_by_city(&city).await?;

    // An unknown city is an empty list by default; the strict policy maps
    // it to 404 instead.
    if listings.is_empty() && state.config.empty_city_is_not_found {
        return Err(AppError::NotFound(format!(
            "No accommodation found in {}",
            city
        )));
    }

    Ok(Json(listings))
}
