//! Inspiration photo model.

use archimatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from `inspiration_photos`, with `room_type_ids` aggregated from
/// the `inspiration_photo_room_types` link table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InspirationPhoto {
    pub id: DbId,
    pub architect_id: DbId,
    pub session_id: Option<DbId>,
    pub image_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Json<Vec<String>>,
    /// Empty means the photo applies to every room.
    pub room_type_ids: Vec<DbId>,
    pub is_active: bool,
    pub is_client_upload: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for an architect creating a photo.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInspirationPhoto {
    pub image_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub room_type_ids: Option<Vec<DbId>>,
    pub session_id: Option<DbId>,
    #[serde(default)]
    pub is_client_upload: bool,
}

/// DTO for a client registering one of their own uploads during a session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSessionPhoto {
    pub image_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// DTO for updating a photo. `room_type_ids`, when present, replaces the
/// whole set (an empty list makes the photo universal).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInspirationPhoto {
    pub image_url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub room_type_ids: Option<Vec<DbId>>,
    pub is_active: Option<bool>,
}

/// Validated insert values.
#[derive(Debug, Clone)]
pub struct NewInspirationPhoto {
    pub architect_id: DbId,
    pub session_id: Option<DbId>,
    pub image_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub room_type_ids: Vec<DbId>,
    pub is_client_upload: bool,
}
