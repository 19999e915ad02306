pub mod postgres_accommodation_repo;
pub mod postgres_user_repo;
pub mod sqlite_accommodation_repo;
pub mod sqlite_user_repo;
