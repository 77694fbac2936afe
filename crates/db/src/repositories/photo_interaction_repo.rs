//! Repository for the `photo_interactions` table.

use std::collections::HashMap;

use archimatch_core::interaction::Annotation;
use archimatch_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::inspiration_photo::InspirationPhoto;
use crate::models::photo_interaction::{InteractionWithPhoto, PhotoInteraction};
use crate::repositories::InspirationPhotoRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, session_id, photo_id, action, annotations, created_at, updated_at";

/// Provides data access for likes, dislikes and annotations.
pub struct PhotoInteractionRepo;

impl PhotoInteractionRepo {
    /// Insert or replace the reaction of a session to a photo.
    pub async fn upsert(
        pool: &PgPool,
        session_id: DbId,
        photo_id: DbId,
        action: &str,
        annotations: &[Annotation],
    ) -> Result<PhotoInteraction, sqlx::Error> {
        let query = format!(
            "INSERT INTO photo_interactions (session_id, photo_id, action, annotations) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT ON CONSTRAINT uq_photo_interactions_session_photo \
             DO UPDATE SET action = EXCLUDED.action, annotations = EXCLUDED.annotations \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PhotoInteraction>(&query)
            .bind(session_id)
            .bind(photo_id)
            .bind(action)
            .bind(Json(annotations))
            .fetch_one(pool)
            .await
    }

    /// Interactions of several sessions, oldest first.
    pub async fn list_for_sessions(
        pool: &PgPool,
        session_ids: &[DbId],
    ) -> Result<Vec<PhotoInteraction>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM photo_interactions \
             WHERE session_id = ANY($1) \
             ORDER BY created_at, id"
        );
        sqlx::query_as::<_, PhotoInteraction>(&query)
            .bind(session_ids)
            .fetch_all(pool)
            .await
    }

    /// Interactions of one session, each joined with its photo.
    pub async fn list_for_session(
        pool: &PgPool,
        session_id: DbId,
    ) -> Result<Vec<InteractionWithPhoto>, sqlx::Error> {
        let interactions = Self::list_for_sessions(pool, &[session_id]).await?;
        Self::attach_photos(pool, interactions).await
    }

    /// Join interactions with their photos. Interactions whose photo vanished
    /// are dropped.
    pub async fn attach_photos(
        pool: &PgPool,
        interactions: Vec<PhotoInteraction>,
    ) -> Result<Vec<InteractionWithPhoto>, sqlx::Error> {
        let mut photo_ids: Vec<DbId> = interactions.iter().map(|i| i.photo_id).collect();
        photo_ids.sort_unstable();
        photo_ids.dedup();

        let photos: HashMap<DbId, InspirationPhoto> = InspirationPhotoRepo::list_by_ids(pool, &photo_ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        Ok(interactions
            .into_iter()
            .filter_map(|interaction| {
                let photo = photos.get(&interaction.photo_id)?.clone();
                Some(InteractionWithPhoto { interaction, photo })
            })
            .collect())
    }
}
