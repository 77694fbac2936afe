//! Question model.

use archimatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use crate::models::room_type::RoomType;

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub room_type_id: DbId,
    pub question_text: String,
    pub question_type: String,
    /// Only set for choice types.
    pub options: Option<Json<Vec<String>>>,
    pub required: bool,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a question.
///
/// `text` and `type` are accepted as aliases for the admin form's field names.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestion {
    #[serde(alias = "text")]
    pub question_text: Option<String>,
    #[serde(alias = "type")]
    pub question_type: Option<String>,
    pub room_type_id: DbId,
    pub options: Option<Vec<String>>,
    pub required: Option<bool>,
    pub display_order: Option<i32>,
}

/// DTO for updating a question. All fields optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateQuestion {
    #[serde(alias = "text")]
    pub question_text: Option<String>,
    #[serde(alias = "type")]
    pub question_type: Option<String>,
    pub options: Option<Vec<String>>,
    pub required: Option<bool>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// Validated column values written on insert and on update.
#[derive(Debug, Clone)]
pub struct QuestionFields {
    pub question_text: String,
    pub question_type: String,
    pub options: Option<Vec<String>>,
    pub required: bool,
    pub display_order: i32,
    pub is_active: bool,
}

/// A question joined with the room type it belongs to.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionWithRoomType {
    #[serde(flatten)]
    pub question: Question,
    pub room_type: RoomType,
}
