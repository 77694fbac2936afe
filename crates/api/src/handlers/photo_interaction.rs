//! Handlers for `/photo-interactions` (likes, dislikes and annotations).

use archimatch_core::interaction::{validate_annotations, PhotoAction};
use archimatch_db::models::photo_interaction::UpsertPhotoInteraction;
use archimatch_db::repositories::{ClientSessionRepo, InspirationPhotoRepo, PhotoInteractionRepo};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::query::SessionIdParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/photo-interactions?session_id=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SessionIdParams>,
) -> AppResult<impl IntoResponse> {
    ClientSessionRepo::find_by_id(&state.pool, params.session_id)
        .await?
        .ok_or_else(|| AppError::not_found("ClientSession", params.session_id))?;
    let interactions = PhotoInteractionRepo::list_for_session(&state.pool, params.session_id).await?;
    Ok(Json(DataResponse { data: interactions }))
}

/// POST /api/v1/photo-interactions
///
/// Insert or replace the reaction of a session to an active photo of its
/// architect.
pub async fn upsert(
    State(state): State<AppState>,
    AppJson(input): AppJson<UpsertPhotoInteraction>,
) -> AppResult<impl IntoResponse> {
    let action = PhotoAction::from_name(&input.action)?;
    validate_annotations(&input.annotations)?;

    let session = ClientSessionRepo::find_by_id(&state.pool, input.session_id)
        .await?
        .ok_or_else(|| AppError::not_found("ClientSession", input.session_id))?;

    InspirationPhotoRepo::find_by_id(&state.pool, session.architect_id, input.photo_id)
        .await?
        .filter(|photo| photo.is_active)
        .ok_or_else(|| AppError::not_found("InspirationPhoto", input.photo_id))?;

    let interaction = PhotoInteractionRepo::upsert(
        &state.pool,
        session.id,
        input.photo_id,
        action.as_str(),
        &input.annotations,
    )
    .await?;
    tracing::debug!(session_id = %session.id, photo_id = %input.photo_id, action = action.as_str(), "Interaction saved");
    Ok(Json(DataResponse { data: interaction }))
}
