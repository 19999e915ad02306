use crate::domain::{models::accommodation::Accommodation, ports::AccommodationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteAccommodationRepo {
    pool: SqlitePool,
}

impl SqliteAccommodationRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const COLUMNS: &str = "id, name, description, max_guests, city, available, user_id, created_at, updated_at";

#[async_trait]
impl AccommodationRepository for SqliteAccommodationRepo {
    async fn create(&self, accommodation: &Accommodation) -> Result<Accommodation, AppError> {
        sqlx::query_as::<_, Accommodation>(
            "INSERT INTO accommodations (id, name, description, max_guests, city, available, user_id, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id, name, description, max_guests, city, available, user_id, created_at, updated_at",
        )
            .bind(&accommodation.id)
            .bind(&accommodation.name)
            .bind(&accommodation.description)
            .bind(accommodation.max_guests)
            .bind(&accommodation.city)
            .bind(accommodation.available)
            .bind(&accommodation.user_id)
            .bind(accommodation.created_at)
            .bind(accommodation.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_all(&self) -> Result<Vec<Accommodation>, AppError> {
        sqlx::query_as::<_, Accommodation>(
            &format!("SELECT {} FROM accommodations ORDER BY created_at ASC", COLUMNS),
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_owner(&self, user_id: &str) -> Result<Vec<Accommodation>, AppError> {
        sqlx::query_as::<_, Accommodation>(
            &format!("SELECT {} FROM accommodations WHERE user_id = ? ORDER BY created_at ASC", COLUMNS),
        )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_available(&self) -> Result<Vec<Accommodation>, AppError> {
        sqlx::query_as::<_, Accommodation>(
            &format!("SELECT {} FROM accommodations WHERE available = TRUE ORDER BY created_at ASC", COLUMNS),
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_city(&self, city: &str) -> Result<Vec<Accommodation>, AppError> {
        sqlx::query_as::<_, Accommodation>(
            &format!("SELECT {} FROM accommodations WHERE city = ? ORDER BY created_at ASC", COLUMNS),
        )
            .bind(city)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
