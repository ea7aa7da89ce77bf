//! Repository for the `businesses` table.

use reserva_core::types::DbId;
use sqlx::PgPool;

use crate::models::business::{Business, CreateBusiness};

/// Column list for businesses queries.
const BUSINESS_COLUMNS: &str = "id, owner_id, name, timezone, created_at, updated_at";

/// Provides CRUD operations for businesses.
pub struct BusinessRepo;

impl BusinessRepo {
    /// Insert a new business, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBusiness) -> Result<Business, sqlx::Error> {
        let query = format!(
            "INSERT INTO businesses (owner_id, name, timezone)
             VALUES ($1, $2, COALESCE($3, 'UTC'))
             RETURNING {BUSINESS_COLUMNS}"
        );
        sqlx::query_as::<_, Business>(&query)
            .bind(input.owner_id)
            .bind(&input.name)
            .bind(&input.timezone)
            .fetch_one(pool)
            .await
    }

    /// Find a business by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Business>, sqlx::Error> {
        let query = format!("SELECT {BUSINESS_COLUMNS} FROM businesses WHERE id = $1");
        sqlx::query_as::<_, Business>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
