//! Repository for `inspiration_photos` and its room-type link table.

use archimatch_core::types::DbId;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::inspiration_photo::{InspirationPhoto, NewInspirationPhoto, UpdateInspirationPhoto};

/// Photo columns plus the aggregated room type ids, read through the `p` alias.
const SELECT_COLUMNS: &str = "p.id, p.architect_id, p.session_id, p.image_url, p.title, \
    p.description, p.tags, \
    COALESCE((SELECT array_agg(prt.room_type_id ORDER BY prt.room_type_id) \
              FROM inspiration_photo_room_types prt WHERE prt.photo_id = p.id), \
             '{}'::uuid[]) AS room_type_ids, \
    p.is_active, p.is_client_upload, p.created_at, p.updated_at";

/// Provides CRUD operations for inspiration photos.
pub struct InspirationPhotoRepo;

impl InspirationPhotoRepo {
    /// Insert a photo and its room links in one transaction.
    pub async fn create(pool: &PgPool, input: &NewInspirationPhoto) -> Result<InspirationPhoto, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO inspiration_photos \
                (architect_id, session_id, image_url, title, description, tags, is_client_upload) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING id",
        )
        .bind(input.architect_id)
        .bind(input.session_id)
        .bind(&input.image_url)
        .bind(&input.title)
        .bind(&input.description)
        .bind(Json(&input.tags))
        .bind(input.is_client_upload)
        .fetch_one(&mut *tx)
        .await?;

        link_room_types(&mut tx, id, &input.room_type_ids).await?;
        tx.commit().await?;

        Self::find_any(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find a photo owned by `architect_id`, active or not.
    pub async fn find_by_id(
        pool: &PgPool,
        architect_id: DbId,
        id: DbId,
    ) -> Result<Option<InspirationPhoto>, sqlx::Error> {
        let query = format!(
            "SELECT {SELECT_COLUMNS} FROM inspiration_photos p \
             WHERE p.id = $1 AND p.architect_id = $2"
        );
        sqlx::query_as::<_, InspirationPhoto>(&query)
            .bind(id)
            .bind(architect_id)
            .fetch_optional(pool)
            .await
    }

    async fn find_any(pool: &PgPool, id: DbId) -> Result<Option<InspirationPhoto>, sqlx::Error> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM inspiration_photos p WHERE p.id = $1");
        sqlx::query_as::<_, InspirationPhoto>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Photos by id regardless of owner or state.
    pub async fn list_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<InspirationPhoto>, sqlx::Error> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM inspiration_photos p WHERE p.id = ANY($1)");
        sqlx::query_as::<_, InspirationPhoto>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Active curated photos of an architect, newest first.
    ///
    /// With a selection, a photo is kept when it has no room link at all or
    /// at least one link into the selection.
    pub async fn list_curated(
        pool: &PgPool,
        architect_id: DbId,
        selected_room_ids: Option<&[DbId]>,
    ) -> Result<Vec<InspirationPhoto>, sqlx::Error> {
        let query = format!(
            "SELECT {SELECT_COLUMNS} FROM inspiration_photos p \
             WHERE p.architect_id = $1 AND p.is_active = true AND p.is_client_upload = false \
               AND ($2::uuid[] IS NULL \
                    OR NOT EXISTS (SELECT 1 FROM inspiration_photo_room_types l WHERE l.photo_id = p.id) \
                    OR EXISTS (SELECT 1 FROM inspiration_photo_room_types l \
                               WHERE l.photo_id = p.id AND l.room_type_id = ANY($2))) \
             ORDER BY p.created_at DESC"
        );
        sqlx::query_as::<_, InspirationPhoto>(&query)
            .bind(architect_id)
            .bind(selected_room_ids)
            .fetch_all(pool)
            .await
    }

    /// Active photos tied to one session (the client's own uploads), newest first.
    pub async fn list_for_session(
        pool: &PgPool,
        architect_id: DbId,
        session_id: DbId,
    ) -> Result<Vec<InspirationPhoto>, sqlx::Error> {
        let query = format!(
            "SELECT {SELECT_COLUMNS} FROM inspiration_photos p \
             WHERE p.architect_id = $1 AND p.session_id = $2 AND p.is_active = true \
             ORDER BY p.created_at DESC"
        );
        sqlx::query_as::<_, InspirationPhoto>(&query)
            .bind(architect_id)
            .bind(session_id)
            .fetch_all(pool)
            .await
    }

    /// Update a photo. `room_type_ids`, when given, replaces the link set in
    /// the same transaction.
    pub async fn update(
        pool: &PgPool,
        architect_id: DbId,
        id: DbId,
        input: &UpdateInspirationPhoto,
    ) -> Result<Option<InspirationPhoto>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let updated: Option<DbId> = sqlx::query_scalar(
            "UPDATE inspiration_photos SET \
                image_url = COALESCE($3, image_url), \
                title = COALESCE($4, title), \
                description = COALESCE($5, description), \
                tags = COALESCE($6, tags), \
                is_active = COALESCE($7, is_active) \
             WHERE id = $1 AND architect_id = $2 \
             RETURNING id",
        )
        .bind(id)
        .bind(architect_id)
        .bind(&input.image_url)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.tags.as_ref().map(Json))
        .bind(input.is_active)
        .fetch_optional(&mut *tx)
        .await?;

        if updated.is_none() {
            return Ok(None);
        }

        if let Some(room_type_ids) = &input.room_type_ids {
            sqlx::query("DELETE FROM inspiration_photo_room_types WHERE photo_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            link_room_types(&mut tx, id, room_type_ids).await?;
        }

        tx.commit().await?;
        Self::find_any(pool, id).await
    }

    /// Soft-delete a photo. Interactions referencing it are kept.
    pub async fn deactivate(pool: &PgPool, architect_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE inspiration_photos SET is_active = false WHERE id = $1 AND architect_id = $2",
        )
        .bind(id)
        .bind(architect_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of active curated photos of an architect.
    pub async fn count_active_curated(pool: &PgPool, architect_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM inspiration_photos \
             WHERE architect_id = $1 AND is_active = true AND is_client_upload = false",
        )
        .bind(architect_id)
        .fetch_one(pool)
        .await
    }
}

async fn link_room_types(
    tx: &mut Transaction<'_, Postgres>,
    photo_id: DbId,
    room_type_ids: &[DbId],
) -> Result<(), sqlx::Error> {
    if room_type_ids.is_empty() {
        return Ok(());
    }
    sqlx::query(
        "INSERT INTO inspiration_photo_room_types (photo_id, room_type_id) \
         SELECT $1, UNNEST($2::uuid[]) \
         ON CONFLICT DO NOTHING",
    )
    .bind(photo_id)
    .bind(room_type_ids)
    .execute(&mut **tx)
    .await?;
    Ok(())
}
