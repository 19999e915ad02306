use crate::domain::models::{accommodation::Accommodation, user::User};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn list(&self) -> Result<Vec<User>, AppError>;
    async fn update(&self, user: &User) -> Result<User, AppError>;
    /// Deleting a user also removes their listings; the FK cascade is the
    /// referential-integrity contract at the store boundary.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait AccommodationRepository: Send + Sync {
    async fn create(&self, accommodation: &Accommodation) -> Result<Accommodation, AppError>;
    /// All listings in insertion order; destination dedup depends on it.
    async fn list_all(&self) -> Result<Vec<Accommodation>, AppError>;
    async fn list_by_owner(&self, user_id: &str) -> Result<Vec<Accommodation>, AppError>;
    async fn list_available(&self) -> Result<Vec<Accommodation>, AppError>;
    async fn list_by_city(&self, city: &str) -> Result<Vec<Accommodation>, AppError>;
}
