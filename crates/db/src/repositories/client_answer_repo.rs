//! Repository for the `client_answers` table.

use archimatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::client_answer::ClientAnswer;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, session_id, question_id, answer_value, created_at, updated_at";

/// Provides data access for wizard answers.
pub struct ClientAnswerRepo;

impl ClientAnswerRepo {
    /// Insert or replace the answer of a session to a question.
    pub async fn upsert(
        pool: &PgPool,
        session_id: DbId,
        question_id: DbId,
        answer_value: &str,
    ) -> Result<ClientAnswer, sqlx::Error> {
        let query = format!(
            "INSERT INTO client_answers (session_id, question_id, answer_value) \
             VALUES ($1, $2, $3) \
             ON CONFLICT ON CONSTRAINT uq_client_answers_session_question \
             DO UPDATE SET answer_value = EXCLUDED.answer_value \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClientAnswer>(&query)
            .bind(session_id)
            .bind(question_id)
            .bind(answer_value)
            .fetch_one(pool)
            .await
    }

    /// Answers of several sessions, oldest first.
    pub async fn list_for_sessions(
        pool: &PgPool,
        session_ids: &[DbId],
    ) -> Result<Vec<ClientAnswer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM client_answers \
             WHERE session_id = ANY($1) \
             ORDER BY created_at, id"
        );
        sqlx::query_as::<_, ClientAnswer>(&query)
            .bind(session_ids)
            .fetch_all(pool)
            .await
    }
}
