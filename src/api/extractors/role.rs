use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use std::sync::Arc;

use crate::api::extractors::auth::AuthUser;
use crate::domain::models::user::{Role, User};
use crate::error::AppError;
use crate::state::AppState;

/// Role gates layered on top of identity resolution. Both are pure checks
/// over the `Role` variant and never run before `AuthUser` succeeds.
pub struct HostUser(pub User);

impl<S> FromRequestParts<S> for HostUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;

        if user.role != Role::Host {
            return Err(AppError::Forbidden("Hosts only!".to_string()));
        }

        Ok(HostUser(user))
    }
}

pub struct AdminUser(pub User);

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;

        if user.role != Role::Admin {
            return Err(AppError::Forbidden("Admins only!".to_string()));
        }

        Ok(AdminUser(user))
    }
}
