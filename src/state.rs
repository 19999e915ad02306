use std::sync::Arc;
use crate::config::Config;
use crate::domain::ports::{AccommodationRepository, UserRepository};
use crate::domain::services::auth_service::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub accommodation_repo: Arc<dyn AccommodationRepository>,
    pub auth_service: Arc<AuthService>,
}
