//! Repository for the `services` table.

use reserva_core::types::DbId;
use sqlx::PgPool;

use crate::models::service::{CreateService, Service};

/// Column list for services queries.
const SERVICE_COLUMNS: &str = "id, business_id, name, duration_mins, created_at, updated_at";

/// Provides CRUD operations for services.
pub struct ServiceRepo;

impl ServiceRepo {
    /// Insert a new service, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateService) -> Result<Service, sqlx::Error> {
        let query = format!(
            "INSERT INTO services (business_id, name, duration_mins)
             VALUES ($1, $2, COALESCE($3, 30))
             RETURNING {SERVICE_COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(input.business_id)
            .bind(&input.name)
            .bind(input.duration_mins)
            .fetch_one(pool)
            .await
    }

    /// Find a service by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {SERVICE_COLUMNS} FROM services WHERE id = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
