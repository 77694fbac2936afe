//! Client answer model.

use archimatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::question::QuestionWithRoomType;

/// A row from the `client_answers` table. Unique per (session, question).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClientAnswer {
    pub id: DbId,
    pub session_id: DbId,
    pub question_id: DbId,
    pub answer_value: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for `POST /client-answers`. `answer_value` is a string, a number,
/// a boolean or an array (multi-value answers).
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertClientAnswer {
    pub session_id: DbId,
    pub question_id: DbId,
    pub answer_value: serde_json::Value,
}

/// An answer joined with its question and the question's room type.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerWithQuestion {
    #[serde(flatten)]
    pub answer: ClientAnswer,
    pub question: QuestionWithRoomType,
}
