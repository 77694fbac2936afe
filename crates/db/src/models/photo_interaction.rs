//! Photo interaction model: like / dislike plus annotations.

use archimatch_core::interaction::Annotation;
use archimatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use crate::models::inspiration_photo::InspirationPhoto;

/// A row from the `photo_interactions` table. Unique per (session, photo).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PhotoInteraction {
    pub id: DbId,
    pub session_id: DbId,
    pub photo_id: DbId,
    pub action: String,
    pub annotations: Json<Vec<Annotation>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for `POST /photo-interactions`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertPhotoInteraction {
    pub session_id: DbId,
    pub photo_id: DbId,
    pub action: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

/// An interaction joined with the photo it targets.
#[derive(Debug, Clone, Serialize)]
pub struct InteractionWithPhoto {
    #[serde(flatten)]
    pub interaction: PhotoInteraction,
    pub photo: InspirationPhoto,
}
