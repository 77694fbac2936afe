//! Repository for the `questions` table.
//!
//! Questions have no owner column; ownership is derived from the room
//! type they belong to.

use archimatch_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::question::{Question, QuestionFields, QuestionWithRoomType};
use crate::models::room_type::RoomType;
use crate::repositories::RoomTypeRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, room_type_id, question_text, question_type, options, required, \
    display_order, is_active, created_at, updated_at";

/// Same columns qualified with the `q` alias, for joins.
const Q_COLUMNS: &str = "q.id, q.room_type_id, q.question_text, q.question_type, q.options, \
    q.required, q.display_order, q.is_active, q.created_at, q.updated_at";

/// Provides CRUD operations for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a new question. The room type must already be checked for ownership.
    pub async fn create(
        pool: &PgPool,
        room_type_id: DbId,
        fields: &QuestionFields,
    ) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions \
                (room_type_id, question_text, question_type, options, required, display_order, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(room_type_id)
            .bind(&fields.question_text)
            .bind(&fields.question_type)
            .bind(fields.options.as_ref().map(Json))
            .bind(fields.required)
            .bind(fields.display_order)
            .bind(fields.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a question whose room type belongs to `architect_id`.
    pub async fn find_by_id(
        pool: &PgPool,
        architect_id: DbId,
        id: DbId,
    ) -> Result<Option<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {Q_COLUMNS} FROM questions q \
             JOIN room_types rt ON rt.id = q.room_type_id \
             WHERE q.id = $1 AND rt.architect_id = $2"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .bind(architect_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a question a client may still answer: the question and its room
    /// type are both active and belong to `architect_id`.
    pub async fn find_answerable(
        pool: &PgPool,
        architect_id: DbId,
        id: DbId,
    ) -> Result<Option<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {Q_COLUMNS} FROM questions q \
             JOIN room_types rt ON rt.id = q.room_type_id \
             WHERE q.id = $1 AND rt.architect_id = $2 \
               AND q.is_active = true AND rt.is_active = true"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .bind(architect_id)
            .fetch_optional(pool)
            .await
    }

    /// Active questions of the architect, optionally restricted to one room
    /// type, each joined with its room type. Ordered by display_order.
    pub async fn list(
        pool: &PgPool,
        architect_id: DbId,
        room_type_id: Option<DbId>,
    ) -> Result<Vec<QuestionWithRoomType>, sqlx::Error> {
        let query = format!(
            "SELECT {Q_COLUMNS} FROM questions q \
             JOIN room_types rt ON rt.id = q.room_type_id \
             WHERE rt.architect_id = $1 AND q.is_active = true \
               AND ($2::uuid IS NULL OR q.room_type_id = $2) \
             ORDER BY q.display_order, q.created_at"
        );
        let questions = sqlx::query_as::<_, Question>(&query)
            .bind(architect_id)
            .bind(room_type_id)
            .fetch_all(pool)
            .await?;
        Self::attach_room_types(pool, questions).await
    }

    /// Active questions of the given room types, ordered by display_order.
    pub async fn list_active_for_room_types(
        pool: &PgPool,
        room_type_ids: &[DbId],
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions \
             WHERE room_type_id = ANY($1) AND is_active = true \
             ORDER BY display_order, created_at"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(room_type_ids)
            .fetch_all(pool)
            .await
    }

    /// Questions by id regardless of their active flag, each joined with its
    /// room type. Used to display answers given to since-retired questions.
    pub async fn list_by_ids_with_room_type(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<QuestionWithRoomType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = ANY($1)");
        let questions = sqlx::query_as::<_, Question>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await?;
        Self::attach_room_types(pool, questions).await
    }

    /// Overwrite every editable column of a question with the merged,
    /// validated values.
    pub async fn update(
        pool: &PgPool,
        architect_id: DbId,
        id: DbId,
        fields: &QuestionFields,
    ) -> Result<Option<Question>, sqlx::Error> {
        let query = format!(
            "UPDATE questions q SET \
                question_text = $3, \
                question_type = $4, \
                options = $5, \
                required = $6, \
                display_order = $7, \
                is_active = $8 \
             FROM room_types rt \
             WHERE q.id = $1 AND rt.id = q.room_type_id AND rt.architect_id = $2 \
             RETURNING {Q_COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .bind(architect_id)
            .bind(&fields.question_text)
            .bind(&fields.question_type)
            .bind(fields.options.as_ref().map(Json))
            .bind(fields.required)
            .bind(fields.display_order)
            .bind(fields.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a question. Existing answers keep referencing it.
    pub async fn deactivate(
        pool: &PgPool,
        architect_id: DbId,
        id: DbId,
    ) -> Result<Option<Question>, sqlx::Error> {
        let query = format!(
            "UPDATE questions q SET is_active = false \
             FROM room_types rt \
             WHERE q.id = $1 AND rt.id = q.room_type_id AND rt.architect_id = $2 \
             RETURNING {Q_COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .bind(architect_id)
            .fetch_optional(pool)
            .await
    }

    /// Number of active questions across the architect's room types.
    pub async fn count_active(pool: &PgPool, architect_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM questions q \
             JOIN room_types rt ON rt.id = q.room_type_id \
             WHERE rt.architect_id = $1 AND q.is_active = true",
        )
        .bind(architect_id)
        .fetch_one(pool)
        .await
    }

    async fn attach_room_types(
        pool: &PgPool,
        questions: Vec<Question>,
    ) -> Result<Vec<QuestionWithRoomType>, sqlx::Error> {
        let mut room_type_ids: Vec<DbId> = questions.iter().map(|q| q.room_type_id).collect();
        room_type_ids.sort_unstable();
        room_type_ids.dedup();

        let room_types: std::collections::HashMap<DbId, RoomType> =
            RoomTypeRepo::find_many(pool, &room_type_ids)
                .await?
                .into_iter()
                .map(|rt| (rt.id, rt))
                .collect();

        Ok(questions
            .into_iter()
            .filter_map(|question| {
                let room_type = room_types.get(&question.room_type_id)?.clone();
                Some(QuestionWithRoomType { question, room_type })
            })
            .collect())
    }
}
