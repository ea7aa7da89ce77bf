pub mod auth;
pub mod booking;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
///
/// /booking/action                  apply a booking action (requires auth)
/// /booking/appointments            list a business's appointments (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login).
        .nest("/auth", auth::router())
        // Booking action workflow.
        .nest("/booking", booking::router())
}
