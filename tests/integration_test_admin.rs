mod common;

use axum::http::StatusCode;
use common::{body_json, TestApp};
use lodging_backend::domain::models::user::Role;
use serde_json::json;

#[tokio::test]
async fn test_non_admin_is_rejected_by_admin_gate() {
    let app = TestApp::new().await;

    let guest_token = app.register("Alice", "alice@example.com", "secret-pw").await;

    let response = app.request("GET", "/user", Some(&guest_token), None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Hosts do not pass the admin gate either.
    app.seed_user("Berta", "berta@example.com", "secret-pw", Role::Host)
        .await;
    let host_token = app.login_token("berta@example.com", "secret-pw").await;

    let response = app.request("GET", "/user", Some(&host_token), None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_lists_all_users_without_password_fields() {
    let app = TestApp::new().await;

    app.seed_user("Root", "root@example.com", "admin-pw", Role::Admin)
        .await;
    app.register("Alice", "alice@example.com", "secret-pw").await;
    let admin_token = app.login_token("root@example.com", "admin-pw").await;

    let response = app.request("GET", "/user", Some(&admin_token), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let users = body_json(response).await;
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 2);
    for user in users {
        assert!(user.get("passwordHash").is_none());
        assert!(user.get("password").is_none());
    }
}

#[tokio::test]
async fn test_admin_fetch_unknown_id_is_not_found() {
    let app = TestApp::new().await;

    app.seed_user("Root", "root@example.com", "admin-pw", Role::Admin)
        .await;
    let admin_token = app.login_token("root@example.com", "admin-pw").await;

    let response = app
        .request("GET", "/user/no-such-id", Some(&admin_token), None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_promotes_guest_to_host() {
    let app = TestApp::new().await;

    app.seed_user("Root", "root@example.com", "admin-pw", Role::Admin)
        .await;
    let admin_token = app.login_token("root@example.com", "admin-pw").await;

    let guest_token = app.register("Bob", "bob@example.com", "secret-pw").await;
    let me = body_json(app.request("GET", "/user/me", Some(&guest_token), None).await).await;
    let bob_id = me["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/user/{}", bob_id),
            Some(&admin_token),
            Some(json!({ "role": "host" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["role"], "host");

    // The promoted user clears the host gate on their existing token.
    let response = app
        .request("GET", "/user/me/accommodation", Some(&guest_token), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_admin_delete_then_fetch_is_not_found() {
    let app = TestApp::new().await;

    app.seed_user("Root", "root@example.com", "admin-pw", Role::Admin)
        .await;
    let admin_token = app.login_token("root@example.com", "admin-pw").await;

    let target = app
        .seed_user("Victim", "victim@example.com", "secret-pw", Role::Guest)
        .await;

    let response = app
        .request("DELETE", &format!("/user/{}", target.id), Some(&admin_token), None)
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .request("GET", &format!("/user/{}", target.id), Some(&admin_token), None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .request("DELETE", &format!("/user/{}", target.id), Some(&admin_token), None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleting_a_host_cascades_to_their_listings() {
    let app = TestApp::new().await;

    app.seed_user("Root", "root@example.com", "admin-pw", Role::Admin)
        .await;
    let admin_token = app.login_token("root@example.com", "admin-pw").await;

    let host = app
        .seed_user("Berta", "berta@example.com", "secret-pw", Role::Host)
        .await;
    let host_token = app.login_token("berta@example.com", "secret-pw").await;

    let response = app
        .request(
            "POST",
            "/user/me/accommodation",
            Some(&host_token),
            Some(json!({
                "name": "Orphan Candidate",
                "description": "Should not outlive its owner",
                "maxGuests": 2,
                "city": "Ghosttown",
                "available": true
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .request("DELETE", &format!("/user/{}", host.id), Some(&admin_token), None)
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.request("GET", "/destinations", None, None).await;
    let body = body_json(response).await;
    let cities = body["cities"].as_array().unwrap();
    assert!(!cities.iter().any(|c| c == "Ghosttown"));
}
