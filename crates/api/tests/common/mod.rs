//! Shared helpers for API integration tests.
//!
//! Builds the full application router (mirroring `main.rs`) against a
//! sqlx-provided test database, and provides request/fixture helpers so
//! individual tests stay declarative.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use reserva_api::auth::jwt::{generate_access_token, JwtConfig};
use reserva_api::auth::password::hash_password;
use reserva_api::config::ServerConfig;
use reserva_api::routes;
use reserva_api::state::AppState;
use reserva_core::clock::{Clock, SystemClock};
use reserva_core::types::{DbId, Timestamp};
use reserva_db::models::appointment::{Appointment, CreateAppointment};
use reserva_db::models::business::CreateBusiness;
use reserva_db::models::contact::CreateContact;
use reserva_db::models::service::CreateService;
use reserva_db::models::user::{CreateUser, User};
use reserva_db::models::vacancy::CreateVacancy;
use reserva_db::repositories::{
    AppointmentRepo, BusinessRepo, ContactRepo, ServiceRepo, UserRepo, VacancyRepo,
};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: test_jwt_config(),
    }
}

/// JWT config shared by the test app and token helpers.
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret-not-for-production".to_string(),
        access_token_expiry_mins: 15,
    }
}

/// Build the full application router with the system clock.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_clock(pool, Arc::new(SystemClock))
}

/// Build the full application router with all middleware layers, using the
/// given database pool and clock.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app_with_clock(pool: PgPool, clock: Arc<dyn Clock>) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
        clock,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body and a Bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixture helpers
// ---------------------------------------------------------------------------

/// Plaintext password used for every fixture user.
pub const FIXTURE_PASSWORD: &str = "fixture-password-123";

/// A fully arranged booking fixture: a business with an owner, a contact,
/// a service, and a vacancy.
pub struct Fixture {
    pub issuer: User,
    pub business_id: DbId,
    pub contact_id: DbId,
    pub service_id: DbId,
    pub vacancy_id: DbId,
}

/// Arrange the standard booking fixture.
pub async fn arrange_fixture(pool: &PgPool) -> Fixture {
    let issuer = UserRepo::create(
        pool,
        &CreateUser {
            name: "Fixture Owner".into(),
            email: "owner@example.test".into(),
            password_hash: hash_password(FIXTURE_PASSWORD).unwrap(),
        },
    )
    .await
    .unwrap();

    let business = BusinessRepo::create(
        pool,
        &CreateBusiness {
            owner_id: issuer.id,
            name: "Fixture Business".into(),
            timezone: None,
        },
    )
    .await
    .unwrap();

    let contact = ContactRepo::create(
        pool,
        &CreateContact {
            business_id: business.id,
            name: "Fixture Contact".into(),
            email: Some("contact@example.test".into()),
        },
    )
    .await
    .unwrap();

    let service = ServiceRepo::create(
        pool,
        &CreateService {
            business_id: business.id,
            name: "Fixture Service".into(),
            duration_mins: None,
        },
    )
    .await
    .unwrap();

    let vacancy = VacancyRepo::create(
        pool,
        &CreateVacancy {
            business_id: business.id,
            service_id: service.id,
            date: Utc::now().date_naive(),
            capacity: None,
        },
    )
    .await
    .unwrap();

    Fixture {
        issuer,
        business_id: business.id,
        contact_id: contact.id,
        service_id: service.id,
        vacancy_id: vacancy.id,
    }
}

/// Create an appointment in the fixture's business.
pub async fn make_appointment(
    pool: &PgPool,
    fixture: &Fixture,
    status_id: i16,
    start_at: Timestamp,
) -> Appointment {
    AppointmentRepo::create(
        pool,
        &CreateAppointment {
            business_id: fixture.business_id,
            issuer_id: fixture.issuer.id,
            contact_id: fixture.contact_id,
            service_id: fixture.service_id,
            vacancy_id: fixture.vacancy_id,
            status_id: Some(status_id),
            start_at,
        },
    )
    .await
    .unwrap()
}

/// Generate a valid access token for the fixture user.
pub fn auth_token(user: &User) -> String {
    generate_access_token(user.id, &user.email, &test_jwt_config()).unwrap()
}
