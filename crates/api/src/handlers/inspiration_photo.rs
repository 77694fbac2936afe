//! Handlers for the `/inspiration-photos` resource (architect side) and
//! the session-keyed photo board used by the wizard.

use archimatch_core::error::CoreError;
use archimatch_core::types::DbId;
use archimatch_db::models::inspiration_photo::{
    CreateInspirationPhoto, CreateSessionPhoto, NewInspirationPhoto, UpdateInspirationPhoto,
};
use archimatch_db::repositories::{ClientSessionRepo, InspirationPhotoRepo, RoomTypeRepo};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthArchitect;
use crate::query::{parse_id_list, PhotoListParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Architect side
// ---------------------------------------------------------------------------

/// GET /api/v1/inspiration-photos?session_id=&selected_room_ids=
///
/// With `session_id`: the photos a client uploaded during that session.
/// Otherwise the curated photos, optionally filtered by room selection.
pub async fn list(
    auth: AuthArchitect,
    State(state): State<AppState>,
    Query(params): Query<PhotoListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(session_id) = params.session_id {
        ClientSessionRepo::find_owned(&state.pool, auth.architect_id, session_id)
            .await?
            .ok_or_else(|| AppError::not_found("ClientSession", session_id))?;
        let photos = InspirationPhotoRepo::list_for_session(&state.pool, auth.architect_id, session_id).await?;
        return Ok(Json(DataResponse { data: photos }));
    }

    let selected = params
        .selected_room_ids
        .as_deref()
        .map(parse_id_list)
        .transpose()?;
    let photos = InspirationPhotoRepo::list_curated(&state.pool, auth.architect_id, selected.as_deref()).await?;
    Ok(Json(DataResponse { data: photos }))
}

/// POST /api/v1/inspiration-photos
pub async fn create(
    auth: AuthArchitect,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateInspirationPhoto>,
) -> AppResult<impl IntoResponse> {
    let image_url = require_image_url(&input.image_url)?;

    if let Some(session_id) = input.session_id {
        ClientSessionRepo::find_owned(&state.pool, auth.architect_id, session_id)
            .await?
            .ok_or_else(|| AppError::not_found("ClientSession", session_id))?;
    } else if input.is_client_upload {
        return Err(AppError::Core(CoreError::Validation(
            "A client upload must belong to a session".into(),
        )));
    }

    let room_type_ids = if input.is_client_upload {
        Vec::new()
    } else {
        dedup_ids(input.room_type_ids.unwrap_or_default())
    };
    ensure_room_types_owned(&state, auth.architect_id, &room_type_ids).await?;

    let photo = InspirationPhotoRepo::create(
        &state.pool,
        &NewInspirationPhoto {
            architect_id: auth.architect_id,
            session_id: input.session_id,
            image_url,
            title: clean_text(input.title),
            description: clean_text(input.description),
            tags: clean_tags(input.tags.unwrap_or_default()),
            room_type_ids,
            is_client_upload: input.is_client_upload,
        },
    )
    .await?;

    tracing::info!(architect_id = %auth.architect_id, photo_id = %photo.id, "Inspiration photo created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: photo })))
}

/// PUT /api/v1/inspiration-photos/{id}
pub async fn update(
    auth: AuthArchitect,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(mut input): AppJson<UpdateInspirationPhoto>,
) -> AppResult<impl IntoResponse> {
    let existing = InspirationPhotoRepo::find_by_id(&state.pool, auth.architect_id, id)
        .await?
        .ok_or_else(|| AppError::not_found("InspirationPhoto", id))?;

    if let Some(url) = input.image_url.as_deref() {
        input.image_url = Some(require_image_url(url)?);
    }
    input.tags = input.tags.map(clean_tags);

    if existing.is_client_upload {
        input.room_type_ids = None;
    } else if let Some(ids) = input.room_type_ids.take() {
        let ids = dedup_ids(ids);
        ensure_room_types_owned(&state, auth.architect_id, &ids).await?;
        input.room_type_ids = Some(ids);
    }

    let photo = InspirationPhotoRepo::update(&state.pool, auth.architect_id, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("InspirationPhoto", id))?;
    Ok(Json(DataResponse { data: photo }))
}

/// DELETE /api/v1/inspiration-photos/{id}
pub async fn deactivate(
    auth: AuthArchitect,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if InspirationPhotoRepo::deactivate(&state.pool, auth.architect_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("InspirationPhoto", id))
    }
}

// ---------------------------------------------------------------------------
// Wizard side (keyed by session id)
// ---------------------------------------------------------------------------

/// GET /api/v1/client-sessions/{id}/photos?selected_room_ids=
///
/// Curated photos of the session's architect, filtered by the explicit
/// selection or, by default, by the rooms stored on the session.
pub async fn list_for_session(
    State(state): State<AppState>,
    Path(session_id): Path<DbId>,
    Query(params): Query<PhotoListParams>,
) -> AppResult<impl IntoResponse> {
    let session = ClientSessionRepo::find_by_id(&state.pool, session_id)
        .await?
        .ok_or_else(|| AppError::not_found("ClientSession", session_id))?;

    let selected = match params.selected_room_ids.as_deref() {
        Some(raw) => parse_id_list(raw)?,
        None => session
            .selected_room_types
            .0
            .iter()
            .filter_map(|id| id.parse::<DbId>().ok())
            .collect(),
    };

    let photos = InspirationPhotoRepo::list_curated(&state.pool, session.architect_id, Some(&selected)).await?;
    Ok(Json(DataResponse { data: photos }))
}

/// POST /api/v1/client-sessions/{id}/photos
///
/// Register a photo the client uploaded (see `POST /upload`).
pub async fn create_for_session(
    State(state): State<AppState>,
    Path(session_id): Path<DbId>,
    AppJson(input): AppJson<CreateSessionPhoto>,
) -> AppResult<impl IntoResponse> {
    let session = ClientSessionRepo::find_by_id(&state.pool, session_id)
        .await?
        .ok_or_else(|| AppError::not_found("ClientSession", session_id))?;

    let photo = InspirationPhotoRepo::create(
        &state.pool,
        &NewInspirationPhoto {
            architect_id: session.architect_id,
            session_id: Some(session.id),
            image_url: require_image_url(&input.image_url)?,
            title: clean_text(input.title),
            description: clean_text(input.description),
            tags: Vec::new(),
            room_type_ids: Vec::new(),
            is_client_upload: true,
        },
    )
    .await?;

    tracing::info!(session_id = %session.id, photo_id = %photo.id, "Client photo registered");
    Ok((StatusCode::CREATED, Json(DataResponse { data: photo })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Every id must be an active room type of the architect.
async fn ensure_room_types_owned(state: &AppState, architect_id: DbId, ids: &[DbId]) -> AppResult<()> {
    if ids.is_empty() {
        return Ok(());
    }
    let found = RoomTypeRepo::find_active_owned(&state.pool, architect_id, ids).await?;
    match ids.iter().find(|id| !found.iter().any(|rt| rt.id == **id)) {
        Some(missing) => Err(AppError::not_found("RoomType", *missing)),
        None => Ok(()),
    }
}

fn require_image_url(url: &str) -> Result<String, CoreError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(CoreError::Validation("image_url is required".into()));
    }
    Ok(url.to_string())
}

fn clean_text(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn clean_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().to_string();
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

fn dedup_ids(mut ids: Vec<DbId>) -> Vec<DbId> {
    ids.sort_unstable();
    ids.dedup();
    ids
}
