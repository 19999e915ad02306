use crate::domain::models::user::Role;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}

/// Presence and type checks happen through deserialization; `max_guests: 0`
/// is a legitimate payload, and negative counts never deserialize.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccommodationRequest {
    pub name: String,
    pub description: String,
    pub max_guests: u32,
    pub city: String,
    pub available: bool,
}
