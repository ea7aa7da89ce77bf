//! Service entity model and DTOs.

use reserva_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A service row from the `services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Service {
    pub id: DbId,
    pub business_id: DbId,
    pub name: String,
    pub duration_mins: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new service.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateService {
    pub business_id: DbId,
    pub name: String,
    /// Defaults to 30 if omitted.
    pub duration_mins: Option<i32>,
}
