//! Business entity model and DTOs.

use reserva_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A business row from the `businesses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Business {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: String,
    pub timezone: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new business.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBusiness {
    pub owner_id: DbId,
    pub name: String,
    /// IANA timezone name. Defaults to `UTC` if omitted.
    pub timezone: Option<String>,
}
