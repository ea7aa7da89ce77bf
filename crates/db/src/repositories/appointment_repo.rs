//! Repository for the `appointments` table.

use reserva_core::booking::StatusId;
use reserva_core::types::DbId;
use sqlx::PgPool;

use crate::models::appointment::{Appointment, CreateAppointment};

/// Column list for appointments queries.
const APPOINTMENT_COLUMNS: &str = "id, business_id, issuer_id, contact_id, service_id, \
    vacancy_id, status_id, start_at, created_at, updated_at";

/// Provides CRUD operations for appointments.
pub struct AppointmentRepo;

impl AppointmentRepo {
    /// Insert a new appointment, returning the created row.
    ///
    /// A missing `status_id` defaults to 1 (Reserved), matching the column
    /// default and the booking flow's initial state.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAppointment,
    ) -> Result<Appointment, sqlx::Error> {
        let query = format!(
            "INSERT INTO appointments
                (business_id, issuer_id, contact_id, service_id, vacancy_id, status_id, start_at)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 1), $7)
             RETURNING {APPOINTMENT_COLUMNS}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(input.business_id)
            .bind(input.issuer_id)
            .bind(input.contact_id)
            .bind(input.service_id)
            .bind(input.vacancy_id)
            .bind(input.status_id)
            .bind(input.start_at)
            .fetch_one(pool)
            .await
    }

    /// Find an appointment by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Appointment>, sqlx::Error> {
        let query = format!("SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE id = $1");
        sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Compare-and-swap the appointment status.
    ///
    /// The update only applies while the row still holds `expected`; a
    /// concurrent action that already moved the status makes this a no-op.
    /// Returns the updated row, or `None` when the swap lost the race (or
    /// the row does not exist).
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        expected: StatusId,
        new: StatusId,
    ) -> Result<Option<Appointment>, sqlx::Error> {
        let query = format!(
            "UPDATE appointments
             SET status_id = $3, updated_at = now()
             WHERE id = $1 AND status_id = $2
             RETURNING {APPOINTMENT_COLUMNS}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .bind(expected)
            .bind(new)
            .fetch_optional(pool)
            .await
    }

    /// List all appointments for a business, soonest first.
    pub async fn list_for_business(
        pool: &PgPool,
        business_id: DbId,
    ) -> Result<Vec<Appointment>, sqlx::Error> {
        let query = format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments
             WHERE business_id = $1
             ORDER BY start_at ASC"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(business_id)
            .fetch_all(pool)
            .await
    }
}
