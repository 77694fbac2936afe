//! Repository for the `client_sessions` table.
//!
//! Sessions are read by id from the public wizard and by owner from the
//! admin views. Relations are loaded with one query per relation and
//! assembled in memory.

use std::collections::HashMap;

use archimatch_core::session::{STATUS_COMPLETED, STATUS_IN_PROGRESS};
use archimatch_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::architect::ArchitectSummary;
use crate::models::client_answer::AnswerWithQuestion;
use crate::models::client_session::{
    ClientSession, ClientSessionDetail, CreateClientSession, DashboardStats, UpdateGeneralInfo,
};
use crate::models::photo_interaction::InteractionWithPhoto;
use crate::repositories::{
    ArchitectRepo, ClientAnswerRepo, InspirationPhotoRepo, PhotoInteractionRepo, QuestionRepo,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, architect_id, first_name, last_name, email, status, completed_at, \
    project_type, housing_type, housing_type_other, property_usage, \
    household_adults, household_children, household_grandchildren, children_ages, \
    has_animals, desired_organization, organization_comments, selected_room_types, \
    created_at, updated_at";

/// Provides data access for client sessions.
pub struct ClientSessionRepo;

impl ClientSessionRepo {
    /// Start a new session in `in_progress`. An unknown architect violates
    /// the foreign key.
    pub async fn create(pool: &PgPool, input: &CreateClientSession) -> Result<ClientSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO client_sessions (architect_id, first_name, last_name, email) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClientSession>(&query)
            .bind(input.architect_id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a session by id, whoever owns it.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ClientSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM client_sessions WHERE id = $1");
        sqlx::query_as::<_, ClientSession>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a session belonging to `architect_id`.
    pub async fn find_owned(
        pool: &PgPool,
        architect_id: DbId,
        id: DbId,
    ) -> Result<Option<ClientSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM client_sessions WHERE id = $1 AND architect_id = $2");
        sqlx::query_as::<_, ClientSession>(&query)
            .bind(id)
            .bind(architect_id)
            .fetch_optional(pool)
            .await
    }

    /// All sessions of an architect, newest first.
    pub async fn list_for_architect(
        pool: &PgPool,
        architect_id: DbId,
    ) -> Result<Vec<ClientSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM client_sessions \
             WHERE architect_id = $1 \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ClientSession>(&query)
            .bind(architect_id)
            .fetch_all(pool)
            .await
    }

    /// Apply the general information step. Absent fields are left untouched.
    pub async fn update_general_info(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGeneralInfo,
    ) -> Result<Option<ClientSession>, sqlx::Error> {
        let query = format!(
            "UPDATE client_sessions SET \
                project_type = COALESCE($2, project_type), \
                housing_type = COALESCE($3, housing_type), \
                housing_type_other = COALESCE($4, housing_type_other), \
                property_usage = COALESCE($5, property_usage), \
                household_adults = COALESCE($6, household_adults), \
                household_children = COALESCE($7, household_children), \
                household_grandchildren = COALESCE($8, household_grandchildren), \
                children_ages = COALESCE($9, children_ages), \
                has_animals = COALESCE($10, has_animals), \
                desired_organization = COALESCE($11, desired_organization), \
                organization_comments = COALESCE($12, organization_comments) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClientSession>(&query)
            .bind(id)
            .bind(&input.project_type)
            .bind(&input.housing_type)
            .bind(&input.housing_type_other)
            .bind(&input.property_usage)
            .bind(input.household_adults)
            .bind(input.household_children)
            .bind(input.household_grandchildren)
            .bind(&input.children_ages)
            .bind(input.has_animals)
            .bind(&input.desired_organization)
            .bind(&input.organization_comments)
            .fetch_optional(pool)
            .await
    }

    /// Replace the stored room selection.
    pub async fn set_room_selection(
        pool: &PgPool,
        id: DbId,
        room_type_ids: &[String],
    ) -> Result<Option<ClientSession>, sqlx::Error> {
        let query = format!(
            "UPDATE client_sessions SET selected_room_types = $2 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClientSession>(&query)
            .bind(id)
            .bind(Json(room_type_ids))
            .fetch_optional(pool)
            .await
    }

    /// Move an `in_progress` session to `status`. `completed_at` is stamped
    /// when the target is `completed`.
    ///
    /// Returns `None` when the session no longer is `in_progress`.
    pub async fn leave_in_progress(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<ClientSession>, sqlx::Error> {
        let query = format!(
            "UPDATE client_sessions SET \
                status = $2, \
                completed_at = CASE WHEN $2 = '{STATUS_COMPLETED}' THEN now() ELSE completed_at END \
             WHERE id = $1 AND status = '{STATUS_IN_PROGRESS}' \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClientSession>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Complete every `in_progress` session of the architect that has at
    /// least one answer. Returns the number of sessions updated.
    pub async fn complete_with_answers(pool: &PgPool, architect_id: DbId) -> Result<u64, sqlx::Error> {
        let query = format!(
            "UPDATE client_sessions s SET status = '{STATUS_COMPLETED}', completed_at = now() \
             WHERE s.architect_id = $1 AND s.status = '{STATUS_IN_PROGRESS}' \
               AND EXISTS (SELECT 1 FROM client_answers a WHERE a.session_id = s.id)"
        );
        let result = sqlx::query(&query).bind(architect_id).execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Hard delete. Answers, interactions and client uploads go with it.
    pub async fn delete(pool: &PgPool, architect_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM client_sessions WHERE id = $1 AND architect_id = $2")
            .bind(id)
            .bind(architect_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Eager-load the architect, answers (with question and room type) and
    /// interactions (with photo) of each session. Order is preserved.
    pub async fn with_relations(
        pool: &PgPool,
        sessions: Vec<ClientSession>,
    ) -> Result<Vec<ClientSessionDetail>, sqlx::Error> {
        if sessions.is_empty() {
            return Ok(Vec::new());
        }

        let session_ids: Vec<DbId> = sessions.iter().map(|s| s.id).collect();
        let mut architect_ids: Vec<DbId> = sessions.iter().map(|s| s.architect_id).collect();
        architect_ids.sort_unstable();
        architect_ids.dedup();

        let architects: HashMap<DbId, ArchitectSummary> = ArchitectRepo::summaries(pool, &architect_ids)
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        let answers = ClientAnswerRepo::list_for_sessions(pool, &session_ids).await?;
        let mut question_ids: Vec<DbId> = answers.iter().map(|a| a.question_id).collect();
        question_ids.sort_unstable();
        question_ids.dedup();
        let questions: HashMap<DbId, _> = QuestionRepo::list_by_ids_with_room_type(pool, &question_ids)
            .await?
            .into_iter()
            .map(|q| (q.question.id, q))
            .collect();

        let mut answers_by_session: HashMap<DbId, Vec<AnswerWithQuestion>> = HashMap::new();
        for answer in answers {
            let Some(question) = questions.get(&answer.question_id) else {
                continue;
            };
            answers_by_session
                .entry(answer.session_id)
                .or_default()
                .push(AnswerWithQuestion {
                    question: question.clone(),
                    answer,
                });
        }

        let interactions = PhotoInteractionRepo::list_for_sessions(pool, &session_ids).await?;
        let mut interactions_by_session: HashMap<DbId, Vec<InteractionWithPhoto>> = HashMap::new();
        for item in PhotoInteractionRepo::attach_photos(pool, interactions).await? {
            interactions_by_session
                .entry(item.interaction.session_id)
                .or_default()
                .push(item);
        }

        Ok(sessions
            .into_iter()
            .map(|session| ClientSessionDetail {
                architect: architects.get(&session.architect_id).cloned(),
                answers: answers_by_session.remove(&session.id).unwrap_or_default(),
                photo_interactions: interactions_by_session.remove(&session.id).unwrap_or_default(),
                session,
            })
            .collect())
    }

    /// Load one session with its relations.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<ClientSessionDetail>, sqlx::Error> {
        let Some(session) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        Ok(Self::with_relations(pool, vec![session]).await?.pop())
    }

    /// Dashboard counters for one architect.
    pub async fn dashboard_stats(pool: &PgPool, architect_id: DbId) -> Result<DashboardStats, sqlx::Error> {
        let (total_sessions, completed_sessions, in_progress_sessions): (i64, i64, i64) = sqlx::query_as(&format!(
            "SELECT COUNT(*), \
                    COUNT(*) FILTER (WHERE status = '{STATUS_COMPLETED}'), \
                    COUNT(*) FILTER (WHERE status = '{STATUS_IN_PROGRESS}') \
             FROM client_sessions WHERE architect_id = $1"
        ))
        .bind(architect_id)
        .fetch_one(pool)
        .await?;

        Ok(DashboardStats {
            total_sessions,
            completed_sessions,
            in_progress_sessions,
            total_questions: QuestionRepo::count_active(pool, architect_id).await?,
            total_photos: InspirationPhotoRepo::count_active_curated(pool, architect_id).await?,
        })
    }
}
