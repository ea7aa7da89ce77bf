//! Repository for the `vacancies` table.

use reserva_core::types::DbId;
use sqlx::PgPool;

use crate::models::vacancy::{CreateVacancy, Vacancy};

/// Column list for vacancies queries.
const VACANCY_COLUMNS: &str = "id, business_id, service_id, date, capacity, created_at, updated_at";

/// Provides CRUD operations for vacancies.
pub struct VacancyRepo;

impl VacancyRepo {
    /// Insert a new vacancy, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVacancy) -> Result<Vacancy, sqlx::Error> {
        let query = format!(
            "INSERT INTO vacancies (business_id, service_id, date, capacity)
             VALUES ($1, $2, $3, COALESCE($4, 1))
             RETURNING {VACANCY_COLUMNS}"
        );
        sqlx::query_as::<_, Vacancy>(&query)
            .bind(input.business_id)
            .bind(input.service_id)
            .bind(input.date)
            .bind(input.capacity)
            .fetch_one(pool)
            .await
    }

    /// Find a vacancy by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Vacancy>, sqlx::Error> {
        let query = format!("SELECT {VACANCY_COLUMNS} FROM vacancies WHERE id = $1");
        sqlx::query_as::<_, Vacancy>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
