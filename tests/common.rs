#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use lodging_backend::{
    api::router::create_router,
    config::Config,
    domain::models::user::{Role, User},
    domain::services::auth_service::{hash_password, AuthService},
    infra::repositories::{
        sqlite_accommodation_repo::SqliteAccommodationRepo,
        sqlite_user_repo::SqliteUserRepo,
    },
    state::AppState,
};
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`
use uuid::Uuid;

pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    pub pool: Pool<Sqlite>,
    db_filename: String,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_settings(60, false).await
    }

    pub async fn with_settings(token_ttl_minutes: i64, empty_city_is_not_found: bool) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url,
            port: 0,
            jwt_secret: "test-signing-secret".to_string(),
            token_ttl_minutes,
            empty_city_is_not_found,
        };

        let user_repo = Arc::new(SqliteUserRepo::new(pool.clone()));
        let auth_service = Arc::new(AuthService::new(user_repo.clone(), &config));

        let state = Arc::new(AppState {
            config,
            user_repo,
            accommodation_repo: Arc::new(SqliteAccommodationRepo::new(pool.clone())),
            auth_service,
        });

        let router = create_router(state.clone());

        Self {
            router,
            state,
            pool,
            db_filename,
        }
    }

    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Registers a fresh guest account and returns its bearer token.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/user/register",
                None,
                Some(serde_json::json!({
                    "name": name,
                    "email": email,
                    "password": password,
                })),
            )
            .await;

        assert_eq!(
            response.status(),
            StatusCode::CREATED,
            "registration failed in test helper"
        );

        let body = body_json(response).await;
        body["accessToken"]
            .as_str()
            .expect("no accessToken in register response")
            .to_string()
    }

    pub async fn login_token(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/user/login",
                None,
                Some(serde_json::json!({ "email": email, "password": password })),
            )
            .await;

        assert_eq!(
            response.status(),
            StatusCode::OK,
            "login failed in test helper"
        );

        let body = body_json(response).await;
        body["accessToken"]
            .as_str()
            .expect("no accessToken in login response")
            .to_string()
    }

    /// Writes a user straight through the repository, bypassing the HTTP
    /// surface, so tests can set up host and admin accounts.
    pub async fn seed_user(&self, name: &str, email: &str, password: &str, role: Role) -> User {
        let mut user = User::new(
            name.to_string(),
            email.to_string(),
            hash_password(password).unwrap(),
        );
        user.role = role;

        self.state
            .user_repo
            .create(&user)
            .await
            .expect("failed to seed user")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
