//! HTTP-level integration tests for the login endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json, FIXTURE_PASSWORD};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../migrations")]
async fn test_login_with_valid_credentials(pool: PgPool) {
    let fixture = common::arrange_fixture(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({
            "email": fixture.issuer.email,
            "password": FIXTURE_PASSWORD,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert_eq!(json["expires_in"], 15 * 60);
    assert_eq!(json["user"]["email"], fixture.issuer.email);
    // The password hash must never appear in a response.
    assert!(json["user"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_login_with_wrong_password_fails(pool: PgPool) {
    let fixture = common::arrange_fixture(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({
            "email": fixture.issuer.email,
            "password": "not-the-password",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_login_with_unknown_email_fails_identically(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({
            "email": "nobody@example.test",
            "password": "whatever",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    // Same message as the wrong-password path.
    assert_eq!(json["error"], "Invalid email or password");
}
