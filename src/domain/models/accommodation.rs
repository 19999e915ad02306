use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A listing. The owner is always set server-side from the authenticated
/// identity, never taken from client input.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    pub id: String,
    pub name: String,
    pub description: String,
    pub max_guests: i64,
    pub city: String,
    pub available: bool,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Accommodation {
    pub fn new(
        name: String,
        description: String,
        max_guests: i64,
        city: String,
        available: bool,
        user_id: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            max_guests,
            city,
            available,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }
}
