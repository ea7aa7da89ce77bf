//! Route definitions for the booking action workflow.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::booking;
use crate::state::AppState;

/// Routes mounted at `/booking`.
///
/// ```text
/// POST /action                       -> post_action
/// GET  /appointments?business={id}   -> list_appointments
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/action", post(booking::post_action))
        .route("/appointments", get(booking::list_appointments))
}
