//! Repository for the `contacts` table.

use reserva_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact::{Contact, CreateContact};

/// Column list for contacts queries.
const CONTACT_COLUMNS: &str = "id, business_id, name, email, created_at, updated_at";

/// Provides CRUD operations for contacts.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new contact, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (business_id, name, email)
             VALUES ($1, $2, $3)
             RETURNING {CONTACT_COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(input.business_id)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a contact by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
