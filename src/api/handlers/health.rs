use axum::{response::IntoResponse, Json};
use serde_json::json;

pub async fn test_probe() -> impl IntoResponse {
    Json(json!({ "message": "Test Success!" }))
}
