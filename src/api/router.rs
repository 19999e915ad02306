use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

use crate::api::handlers::{accommodation, admin, destination, health, user};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/test", get(health::test_probe))

        // Registration & login
        .route("/user/register", post(user::register))
        .route("/user/login", post(user::login))

        // Self profile
        .route("/user/me", get(user::get_me).put(user::update_me).delete(user::delete_me))

        // Host listings
        .route(
            "/user/me/accommodation",
            post(accommodation::create_accommodation).get(accommodation::list_own_accommodations),
        )
        .route(
            "/user/me/available-accommodation",
            get(accommodation::list_available_accommodations),
        )

        // Admin user management
        .route("/user", get(admin::list_users))
        .route(
            "/user/{id}",
            get(admin::get_user).put(admin::update_user).delete(admin::delete_user),
        )

        // Destinations
        .route("/destinations", get(destination::list_cities))
        .route("/destinations/{city}", get(destination::list_by_city))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
