//! Repository for the `architects` table.

use archimatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::architect::{Architect, ArchitectSummary, CreateArchitect};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, password_hash, name, company, created_at, updated_at";

/// Provides data access for architect accounts.
pub struct ArchitectRepo;

impl ArchitectRepo {
    /// Insert a new architect. A duplicate email violates
    /// `uq_architects_email`.
    pub async fn create(pool: &PgPool, input: &CreateArchitect) -> Result<Architect, sqlx::Error> {
        let query = format!(
            "INSERT INTO architects (email, password_hash, name, company) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Architect>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.name)
            .bind(&input.company)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Architect>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM architects WHERE id = $1");
        sqlx::query_as::<_, Architect>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Case-insensitive lookup by email.
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<Architect>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM architects WHERE lower(email) = lower($1)");
        sqlx::query_as::<_, Architect>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Public identity of several architects at once.
    pub async fn summaries(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<ArchitectSummary>, sqlx::Error> {
        sqlx::query_as::<_, ArchitectSummary>(
            "SELECT id, name, company, email FROM architects WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(pool)
        .await
    }

    /// Replace the stored password hash. Returns `false` if no such architect.
    pub async fn update_password(
        pool: &PgPool,
        id: DbId,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE architects SET password_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
