//! Repository for the `room_types` table.

use std::collections::HashMap;

use archimatch_core::catalog::{DEFAULT_CATALOG, DEFAULT_QUESTIONS};
use archimatch_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::room_type::{CreateRoomType, RoomType, RoomTypeNode, UpdateRoomType};
use crate::repositories::QuestionRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, architect_id, parent_id, name, display_order, is_active, created_at, updated_at";

/// Same columns qualified with the `rt` alias, for joins.
const RT_COLUMNS: &str = "rt.id, rt.architect_id, rt.parent_id, rt.name, rt.display_order, \
    rt.is_active, rt.created_at, rt.updated_at";

/// Provides CRUD operations for room types.
pub struct RoomTypeRepo;

impl RoomTypeRepo {
    /// Insert a new room type. The name must already be trimmed and the
    /// parent validated by the caller.
    ///
    /// An active duplicate name violates `uq_room_types_active_name`.
    pub async fn create(
        pool: &PgPool,
        architect_id: DbId,
        input: &CreateRoomType,
    ) -> Result<RoomType, sqlx::Error> {
        let query = format!(
            "INSERT INTO room_types (architect_id, parent_id, name, display_order) \
             VALUES ($1, $2, $3, COALESCE($4, 0)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RoomType>(&query)
            .bind(architect_id)
            .bind(input.parent_id)
            .bind(&input.name)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Find a room type owned by `architect_id`, active or not.
    pub async fn find_by_id(
        pool: &PgPool,
        architect_id: DbId,
        id: DbId,
    ) -> Result<Option<RoomType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM room_types WHERE id = $1 AND architect_id = $2");
        sqlx::query_as::<_, RoomType>(&query)
            .bind(id)
            .bind(architect_id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active room type by name (case-insensitive).
    pub async fn find_active_by_name(
        pool: &PgPool,
        architect_id: DbId,
        name: &str,
    ) -> Result<Option<RoomType>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM room_types \
             WHERE architect_id = $1 AND lower(name) = lower($2) AND is_active = true"
        );
        sqlx::query_as::<_, RoomType>(&query)
            .bind(architect_id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Fetch several room types by id regardless of owner or state. Used to
    /// join historical answers to their room.
    pub async fn find_many(pool: &PgPool, ids: &[DbId]) -> Result<Vec<RoomType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM room_types WHERE id = ANY($1)");
        sqlx::query_as::<_, RoomType>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Fetch the active room types among `ids` that belong to `architect_id`.
    /// Ids owned by someone else, soft-deleted or unknown are silently dropped.
    pub async fn find_active_owned(
        pool: &PgPool,
        architect_id: DbId,
        ids: &[DbId],
    ) -> Result<Vec<RoomType>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM room_types \
             WHERE architect_id = $1 AND is_active = true AND id = ANY($2)"
        );
        sqlx::query_as::<_, RoomType>(&query)
            .bind(architect_id)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Number of active room types of an architect.
    pub async fn count_active(pool: &PgPool, architect_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM room_types WHERE architect_id = $1 AND is_active = true",
        )
        .bind(architect_id)
        .fetch_one(pool)
        .await
    }

    /// Flat list of visible room types: active rows whose parent (if any)
    /// is active too. Ordered by display_order, then name.
    pub async fn list_active(pool: &PgPool, architect_id: DbId) -> Result<Vec<RoomType>, sqlx::Error> {
        let query = format!(
            "SELECT {RT_COLUMNS} FROM room_types rt \
             LEFT JOIN room_types p ON p.id = rt.parent_id \
             WHERE rt.architect_id = $1 AND rt.is_active = true \
               AND (rt.parent_id IS NULL OR p.is_active = true) \
             ORDER BY rt.display_order, rt.name"
        );
        sqlx::query_as::<_, RoomType>(&query)
            .bind(architect_id)
            .fetch_all(pool)
            .await
    }

    /// Active categories, each with its active questions and active children
    /// (which carry their own active questions).
    pub async fn list_tree(pool: &PgPool, architect_id: DbId) -> Result<Vec<RoomTypeNode>, sqlx::Error> {
        let visible = Self::list_active(pool, architect_id).await?;
        let ids: Vec<DbId> = visible.iter().map(|rt| rt.id).collect();
        let questions = QuestionRepo::list_active_for_room_types(pool, &ids).await?;

        let mut questions_by_room: HashMap<DbId, Vec<_>> = HashMap::new();
        for q in questions {
            questions_by_room.entry(q.room_type_id).or_default().push(q);
        }

        let (roots, children): (Vec<RoomType>, Vec<RoomType>) =
            visible.into_iter().partition(|rt| rt.parent_id.is_none());

        let mut children_by_parent: HashMap<DbId, Vec<RoomTypeNode>> = HashMap::new();
        for child in children {
            let Some(parent_id) = child.parent_id else {
                continue;
            };
            let node = RoomTypeNode {
                questions: questions_by_room.remove(&child.id).unwrap_or_default(),
                children: Vec::new(),
                room_type: child,
            };
            children_by_parent.entry(parent_id).or_default().push(node);
        }

        Ok(roots
            .into_iter()
            .map(|root| RoomTypeNode {
                questions: questions_by_room.remove(&root.id).unwrap_or_default(),
                children: children_by_parent.remove(&root.id).unwrap_or_default(),
                room_type: root,
            })
            .collect())
    }

    /// Update a room type. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` belongs to the architect.
    pub async fn update(
        pool: &PgPool,
        architect_id: DbId,
        id: DbId,
        input: &UpdateRoomType,
    ) -> Result<Option<RoomType>, sqlx::Error> {
        let query = format!(
            "UPDATE room_types SET \
                name = COALESCE($3, name), \
                display_order = COALESCE($4, display_order), \
                is_active = COALESCE($5, is_active) \
             WHERE id = $1 AND architect_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RoomType>(&query)
            .bind(id)
            .bind(architect_id)
            .bind(&input.name)
            .bind(input.display_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a room type. Children and questions are left untouched.
    ///
    /// Returns `None` if the room type does not exist for this architect.
    pub async fn deactivate(
        pool: &PgPool,
        architect_id: DbId,
        id: DbId,
    ) -> Result<Option<RoomType>, sqlx::Error> {
        let query = format!(
            "UPDATE room_types SET is_active = false \
             WHERE id = $1 AND architect_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RoomType>(&query)
            .bind(id)
            .bind(architect_id)
            .fetch_optional(pool)
            .await
    }

    /// Create the default catalog (categories, rooms, starter questions) in
    /// one transaction. Returns the number of room types created.
    pub async fn seed_default_catalog(pool: &PgPool, architect_id: DbId) -> Result<usize, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut room_ids: HashMap<&str, DbId> = HashMap::new();
        let mut created = 0usize;

        for (cat_index, category) in DEFAULT_CATALOG.iter().enumerate() {
            let category_id: DbId = sqlx::query_scalar(
                "INSERT INTO room_types (architect_id, name, display_order) \
                 VALUES ($1, $2, $3) RETURNING id",
            )
            .bind(architect_id)
            .bind(category.name)
            .bind(cat_index as i32)
            .fetch_one(&mut *tx)
            .await?;
            created += 1;

            for (room_index, room) in category.rooms.iter().enumerate() {
                let room_id: DbId = sqlx::query_scalar(
                    "INSERT INTO room_types (architect_id, parent_id, name, display_order) \
                     VALUES ($1, $2, $3, $4) RETURNING id",
                )
                .bind(architect_id)
                .bind(category_id)
                .bind(*room)
                .bind(room_index as i32)
                .fetch_one(&mut *tx)
                .await?;
                room_ids.insert(room, room_id);
                created += 1;
            }
        }

        let mut order_by_room: HashMap<&str, i32> = HashMap::new();
        for q in DEFAULT_QUESTIONS {
            let Some(room_id) = room_ids.get(q.room) else {
                continue;
            };
            let order = order_by_room.entry(q.room).or_insert(0);
            let options: Option<Vec<&str>> = if q.options.is_empty() {
                None
            } else {
                Some(q.options.to_vec())
            };
            sqlx::query(
                "INSERT INTO questions \
                    (room_type_id, question_text, question_type, options, required, display_order) \
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(room_id)
            .bind(q.text)
            .bind(q.question_type)
            .bind(options.map(Json))
            .bind(q.required)
            .bind(*order)
            .execute(&mut *tx)
            .await?;
            *order += 1;
        }

        tx.commit().await?;
        tracing::info!(%architect_id, created, "Seeded default room catalog");
        Ok(created)
    }
}
