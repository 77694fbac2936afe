//! Handlers for the `/room-types` resource.
//!
//! Room types form a two-level tree per architect. Names are unique among
//! an architect's active room types, case-insensitively.

use archimatch_core::error::CoreError;
use archimatch_core::room_type::{validate_parent_is_root, validate_room_type_name};
use archimatch_core::types::DbId;
use archimatch_db::models::room_type::{CreateRoomType, UpdateRoomType};
use archimatch_db::repositories::RoomTypeRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthArchitect;
use crate::query::IncludeChildrenParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/room-types?include_children=false
///
/// Flat list of visible room types, or the category tree with questions.
pub async fn list(
    auth: AuthArchitect,
    State(state): State<AppState>,
    Query(params): Query<IncludeChildrenParams>,
) -> AppResult<Response> {
    if params.include_children {
        let tree = RoomTypeRepo::list_tree(&state.pool, auth.architect_id).await?;
        return Ok(Json(DataResponse { data: tree }).into_response());
    }
    let room_types = RoomTypeRepo::list_active(&state.pool, auth.architect_id).await?;
    Ok(Json(DataResponse { data: room_types }).into_response())
}

/// POST /api/v1/room-types
pub async fn create(
    auth: AuthArchitect,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateRoomType>,
) -> AppResult<impl IntoResponse> {
    let name = validate_room_type_name(&input.name)?;

    if let Some(parent_id) = input.parent_id {
        let parent = RoomTypeRepo::find_by_id(&state.pool, auth.architect_id, parent_id)
            .await?
            .filter(|p| p.is_active)
            .ok_or_else(|| AppError::not_found("RoomType", parent_id))?;
        validate_parent_is_root(parent.id, parent.parent_id)?;
    }

    ensure_name_free(&state, auth.architect_id, &name, None).await?;

    let room_type = RoomTypeRepo::create(
        &state.pool,
        auth.architect_id,
        &CreateRoomType {
            name,
            display_order: input.display_order,
            parent_id: input.parent_id,
        },
    )
    .await?;

    tracing::info!(architect_id = %auth.architect_id, room_type_id = %room_type.id, "Room type created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: room_type })))
}

/// PUT /api/v1/room-types/{id}
pub async fn update(
    auth: AuthArchitect,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(mut input): AppJson<UpdateRoomType>,
) -> AppResult<impl IntoResponse> {
    let existing = RoomTypeRepo::find_by_id(&state.pool, auth.architect_id, id)
        .await?
        .ok_or_else(|| AppError::not_found("RoomType", id))?;

    if let Some(name) = input.name.as_deref() {
        input.name = Some(validate_room_type_name(name)?);
    }

    // A rename, or a reactivation, may collide with another active row.
    let becomes_active = input.is_active.unwrap_or(existing.is_active);
    if becomes_active {
        let name = input.name.as_deref().unwrap_or(&existing.name);
        ensure_name_free(&state, auth.architect_id, name, Some(id)).await?;
    }

    let room_type = RoomTypeRepo::update(&state.pool, auth.architect_id, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("RoomType", id))?;
    Ok(Json(DataResponse { data: room_type }))
}

/// DELETE /api/v1/room-types/{id}
///
/// Soft delete of the target row only.
pub async fn deactivate(
    auth: AuthArchitect,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    RoomTypeRepo::deactivate(&state.pool, auth.architect_id, id)
        .await?
        .ok_or_else(|| AppError::not_found("RoomType", id))?;
    tracing::info!(architect_id = %auth.architect_id, room_type_id = %id, "Room type deactivated");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/room-types/seed-default
///
/// Install the default catalog. Refused once the architect has room types.
pub async fn seed_default(
    auth: AuthArchitect,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    if RoomTypeRepo::count_active(&state.pool, auth.architect_id).await? > 0 {
        return Err(AppError::Core(CoreError::Conflict(
            "Room types already exist for this architect".into(),
        )));
    }

    RoomTypeRepo::seed_default_catalog(&state.pool, auth.architect_id).await?;
    let tree = RoomTypeRepo::list_tree(&state.pool, auth.architect_id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: tree })))
}

async fn ensure_name_free(
    state: &AppState,
    architect_id: DbId,
    name: &str,
    except: Option<DbId>,
) -> AppResult<()> {
    let clash = RoomTypeRepo::find_active_by_name(&state.pool, architect_id, name).await?;
    match clash {
        Some(other) if Some(other.id) != except => Err(AppError::Core(CoreError::Conflict(format!(
            "A room type named '{name}' already exists"
        )))),
        _ => Ok(()),
    }
}
