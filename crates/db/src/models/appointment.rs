//! Appointment entity model and DTOs.

use reserva_core::booking::{AppointmentStatus, StatusId};
use reserva_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An appointment row from the `appointments` table.
///
/// `status_id` references the `appointment_statuses` lookup table and only
/// changes through the status machine (see `AppointmentRepo::update_status`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Appointment {
    pub id: DbId,
    pub business_id: DbId,
    pub issuer_id: DbId,
    pub contact_id: DbId,
    pub service_id: DbId,
    pub vacancy_id: DbId,
    pub status_id: StatusId,
    pub start_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Appointment {
    /// Decode the stored status ID.
    ///
    /// Returns `None` for an ID outside the seeded range, which indicates
    /// schema drift rather than a recoverable condition.
    pub fn status(&self) -> Option<AppointmentStatus> {
        AppointmentStatus::from_id(self.status_id)
    }
}

/// DTO for creating a new appointment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAppointment {
    pub business_id: DbId,
    pub issuer_id: DbId,
    pub contact_id: DbId,
    pub service_id: DbId,
    pub vacancy_id: DbId,
    /// Defaults to 1 (Reserved) if omitted.
    pub status_id: Option<StatusId>,
    pub start_at: Timestamp,
}
