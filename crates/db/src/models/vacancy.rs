//! Vacancy entity model and DTOs.

use chrono::NaiveDate;
use reserva_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A vacancy row from the `vacancies` table.
///
/// A vacancy is a published availability slot a business opens for a
/// service on a given date.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vacancy {
    pub id: DbId,
    pub business_id: DbId,
    pub service_id: DbId,
    pub date: NaiveDate,
    pub capacity: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new vacancy.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVacancy {
    pub business_id: DbId,
    pub service_id: DbId,
    pub date: NaiveDate,
    /// Defaults to 1 if omitted.
    pub capacity: Option<i32>,
}
