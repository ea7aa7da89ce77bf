//! Contact entity model and DTOs.

use reserva_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A contact row from the `contacts` table.
///
/// A contact is the person an appointment is booked for, scoped to a
/// business's address book.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub business_id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new contact.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContact {
    pub business_id: DbId,
    pub name: String,
    pub email: Option<String>,
}
