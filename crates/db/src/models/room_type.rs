//! Room type model: a category or a concrete room in the two-level tree.

use archimatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::question::Question;

/// A row from the `room_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RoomType {
    pub id: DbId,
    pub architect_id: DbId,
    pub parent_id: Option<DbId>,
    pub name: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a room type. The owner comes from the authenticated caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoomType {
    pub name: String,
    pub display_order: Option<i32>,
    pub parent_id: Option<DbId>,
}

/// DTO for updating a room type. Reparenting is not supported.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRoomType {
    pub name: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// A category with its active questions and active child rooms.
#[derive(Debug, Clone, Serialize)]
pub struct RoomTypeNode {
    #[serde(flatten)]
    pub room_type: RoomType,
    pub questions: Vec<Question>,
    pub children: Vec<RoomTypeNode>,
}
