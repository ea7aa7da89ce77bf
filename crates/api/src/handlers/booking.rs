//! Handlers for the booking action workflow.
//!
//! The action endpoint drives the appointment status machine: the caller
//! names an action (`serve`, `annulate`, `confirm`, or anything else) and a
//! response widget (`row`, `panel`). Outcomes follow a two-tier error model:
//! an unrecognized action is absorbed as a no-op and still reports `OK`,
//! while an unrecognized widget is the one input rejected explicitly, with
//! `code: ERROR` on an otherwise successful HTTP 200 response.

use axum::extract::{Query, State};
use axum::Json;
use reserva_core::booking::{self, BookingAction, Transition};
use reserva_core::error::CoreError;
use reserva_core::types::DbId;
use reserva_core::widget::Widget;
use reserva_db::models::appointment::Appointment;
use reserva_db::repositories::{AppointmentRepo, BusinessRepo};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, CODE_ERROR, CODE_OK};
use crate::state::AppState;

/// Request body for `POST /api/booking/action`.
///
/// `action` and `widget` are deliberately free-form strings: the endpoint
/// accepts arbitrary names and decides per field whether to reject or absorb.
#[derive(Debug, Deserialize)]
pub struct BookingActionRequest {
    pub business: DbId,
    pub appointment: DbId,
    pub action: String,
    pub widget: String,
}

/// Query parameters for `GET /api/booking/appointments`.
#[derive(Debug, Deserialize)]
pub struct ListAppointmentsQuery {
    pub business: DbId,
}

/// POST /api/booking/action
///
/// Apply a named action to an appointment and render the result with the
/// named widget. Every processed request answers HTTP 200; the `code`
/// field distinguishes `OK` (including no-op outcomes) from `ERROR`
/// (invalid widget name only).
pub async fn post_action(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<BookingActionRequest>,
) -> AppResult<Json<Value>> {
    let appointment = AppointmentRepo::find_by_id(&state.pool, input.appointment)
        .await?
        .filter(|a| a.business_id == input.business)
        .ok_or(CoreError::NotFound {
            entity: "Appointment",
            id: input.appointment,
        })?;

    ensure_business_actor(&state, &auth, &appointment).await?;

    // Widget validation is independent of the transition outcome: a bad
    // widget name rejects the request even when the action would have
    // applied, and it is the only input that surfaces an explicit error.
    let widget = match Widget::from_name(&input.widget) {
        Ok(widget) => widget,
        Err(err) => {
            tracing::warn!(widget = %input.widget, "Rejecting unknown widget type");
            return Ok(Json(json!({
                "code": CODE_ERROR,
                "reason": err.to_string(),
            })));
        }
    };

    let appointment = match BookingAction::from_name(&input.action) {
        Some(action) => run_transition(&state, appointment, action).await?,
        None => {
            // Unknown action names are absorbed as no-ops; the request
            // still reports success.
            tracing::debug!(action = %input.action, "Ignoring unrecognized action");
            appointment
        }
    };

    Ok(Json(json!({
        "code": CODE_OK,
        "appointment": render_widget(&appointment, widget),
    })))
}

/// GET /api/booking/appointments?business={id}
///
/// List a business's appointments, soonest first. Restricted to the
/// business owner.
pub async fn list_appointments(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<ListAppointmentsQuery>,
) -> AppResult<Json<DataResponse<Vec<Appointment>>>> {
    let business = BusinessRepo::find_by_id(&state.pool, query.business)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Business",
            id: query.business,
        })?;

    if business.owner_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the business owner may list appointments".into(),
        )));
    }

    let appointments = AppointmentRepo::list_for_business(&state.pool, query.business).await?;
    Ok(Json(DataResponse { data: appointments }))
}

/// Run the status machine and persist an applied transition.
///
/// Persistence uses a compare-and-swap keyed on the status the machine saw,
/// so two simultaneous actions on the same appointment cannot both apply.
/// The loser of a race re-reads and reports the winning state, which is the
/// same observable outcome as having arrived second.
async fn run_transition(
    state: &AppState,
    appointment: Appointment,
    action: BookingAction,
) -> AppResult<Appointment> {
    let status = appointment.status().ok_or_else(|| {
        AppError::InternalError(format!(
            "Appointment {} has unknown status id {}",
            appointment.id, appointment.status_id
        ))
    })?;

    match booking::apply(status, appointment.start_at, action, state.clock.now()) {
        Transition::Applied(next) => {
            let swapped = AppointmentRepo::update_status(
                &state.pool,
                appointment.id,
                status.id(),
                next.id(),
            )
            .await?;

            match swapped {
                Some(updated) => {
                    tracing::info!(
                        appointment_id = updated.id,
                        action = action.name(),
                        from = status.name(),
                        to = next.name(),
                        "Applied booking action"
                    );
                    Ok(updated)
                }
                None => AppointmentRepo::find_by_id(&state.pool, appointment.id)
                    .await?
                    .ok_or_else(|| {
                        AppError::InternalError(format!(
                            "Appointment {} vanished during status update",
                            appointment.id
                        ))
                    }),
            }
        }
        Transition::Unchanged => {
            tracing::debug!(
                appointment_id = appointment.id,
                action = action.name(),
                status = status.name(),
                "Booking action was a no-op"
            );
            Ok(appointment)
        }
    }
}

/// Verify the authenticated user may act on this appointment: either the
/// issuing user or the owner of the business it belongs to.
async fn ensure_business_actor(
    state: &AppState,
    auth: &AuthUser,
    appointment: &Appointment,
) -> AppResult<()> {
    if appointment.issuer_id == auth.user_id {
        return Ok(());
    }

    let business = BusinessRepo::find_by_id(&state.pool, appointment.business_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Business",
            id: appointment.business_id,
        })?;

    if business.owner_id == auth.user_id {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(
            "Not associated with this business".into(),
        )))
    }
}

/// Render an appointment with the requested widget.
///
/// Pure function of the appointment row and the widget kind: `row` is the
/// compact list rendering, `panel` adds the associated entity references.
fn render_widget(appointment: &Appointment, widget: Widget) -> Value {
    let status = appointment
        .status()
        .map(|s| s.name())
        .unwrap_or("unknown");

    match widget {
        Widget::Row => json!({
            "widget": widget.name(),
            "id": appointment.id,
            "status": status,
            "start_at": appointment.start_at,
        }),
        Widget::Panel => json!({
            "widget": widget.name(),
            "id": appointment.id,
            "status": status,
            "start_at": appointment.start_at,
            "business": appointment.business_id,
            "contact": appointment.contact_id,
            "service": appointment.service_id,
            "vacancy": appointment.vacancy_id,
        }),
    }
}
