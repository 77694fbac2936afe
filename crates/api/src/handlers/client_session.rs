//! Handlers for the `/client-sessions` resource.
//!
//! The wizard endpoints are public and keyed by the session id; listing,
//! deletion, abandonment, maintenance and the report require the owning
//! architect's token.

use archimatch_core::error::CoreError;
use archimatch_core::session::{check_transition, SessionStatus, Transition};
use archimatch_core::types::DbId;
use archimatch_db::models::client_session::{ClientSession, CreateClientSession, UpdateGeneralInfo};
use archimatch_db::repositories::{ArchitectRepo, ClientSessionRepo, RoomTypeRepo};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthArchitect;
use crate::report;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /client-sessions`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSessionRequest {
    pub architect_id: DbId,
    #[validate(length(min = 1, max = 100, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
}

/// Response body of the maintenance endpoint.
#[derive(Debug, Serialize)]
pub struct StatusUpdateResult {
    pub count: u64,
}

// ---------------------------------------------------------------------------
// Wizard (public, keyed by session id)
// ---------------------------------------------------------------------------

/// POST /api/v1/client-sessions
pub async fn create(
    State(state): State<AppState>,
    AppJson(mut input): AppJson<CreateSessionRequest>,
) -> AppResult<impl IntoResponse> {
    input.first_name = input.first_name.trim().to_string();
    input.last_name = input.last_name.trim().to_string();
    input.email = input.email.trim().to_string();
    input.validate()?;

    ArchitectRepo::find_by_id(&state.pool, input.architect_id)
        .await?
        .ok_or_else(|| AppError::not_found("Architect", input.architect_id))?;

    let session = ClientSessionRepo::create(
        &state.pool,
        &CreateClientSession {
            architect_id: input.architect_id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
        },
    )
    .await?;

    tracing::info!(session_id = %session.id, architect_id = %session.architect_id, "Client session started");
    Ok((StatusCode::CREATED, Json(DataResponse { data: session })))
}

/// GET /api/v1/client-sessions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = ClientSessionRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("ClientSession", id))?;
    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/v1/client-sessions/{id}/general-info
pub async fn update_general_info(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateGeneralInfo>,
) -> AppResult<impl IntoResponse> {
    let counts = [
        ("household_adults", input.household_adults),
        ("household_children", input.household_children),
        ("household_grandchildren", input.household_grandchildren),
    ];
    for (field, value) in counts {
        if value.is_some_and(|v| v < 0) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "{field} must not be negative"
            ))));
        }
    }

    let session = ClientSessionRepo::update_general_info(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("ClientSession", id))?;
    Ok(Json(DataResponse { data: session }))
}

/// PUT /api/v1/client-sessions/{id}/room-selection
///
/// Body: `{ "selected_room_types": ["<room type id>", ...] }`.
pub async fn set_room_selection(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(body): AppJson<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    let ids = parse_room_ids(&parse_room_selection(&body)?)?;
    let session = ClientSessionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("ClientSession", id))?;

    let found = RoomTypeRepo::find_active_owned(&state.pool, session.architect_id, &ids).await?;
    if let Some(missing) = ids.iter().find(|wanted| !found.iter().any(|rt| rt.id == **wanted)) {
        return Err(AppError::not_found("RoomType", *missing));
    }

    let selection: Vec<String> = ids.iter().map(DbId::to_string).collect();
    let session = ClientSessionRepo::set_room_selection(&state.pool, id, &selection)
        .await?
        .ok_or_else(|| AppError::not_found("ClientSession", id))?;
    Ok(Json(DataResponse { data: session }))
}

/// PATCH /api/v1/client-sessions/{id}/complete
///
/// Idempotent: a completed session keeps its original `completed_at`.
pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let session = ClientSessionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("ClientSession", id))?;
    let session = transition(&state, session, SessionStatus::Completed).await?;
    Ok(Json(DataResponse { data: session }))
}

// ---------------------------------------------------------------------------
// Architect side
// ---------------------------------------------------------------------------

/// GET /api/v1/client-sessions
///
/// Newest first, with answers and interactions loaded.
pub async fn list(
    auth: AuthArchitect,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let sessions = ClientSessionRepo::list_for_architect(&state.pool, auth.architect_id).await?;
    let details = ClientSessionRepo::with_relations(&state.pool, sessions).await?;
    Ok(Json(DataResponse { data: details }))
}

/// PATCH /api/v1/client-sessions/{id}/abandon
pub async fn abandon(
    auth: AuthArchitect,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let session = ClientSessionRepo::find_owned(&state.pool, auth.architect_id, id)
        .await?
        .ok_or_else(|| AppError::not_found("ClientSession", id))?;
    let session = transition(&state, session, SessionStatus::Abandoned).await?;
    Ok(Json(DataResponse { data: session }))
}

/// DELETE /api/v1/client-sessions/{id}
pub async fn delete(
    auth: AuthArchitect,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ClientSessionRepo::delete(&state.pool, auth.architect_id, id).await? {
        tracing::info!(session_id = %id, "Client session deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("ClientSession", id))
    }
}

/// POST /api/v1/client-sessions/update-status
///
/// Complete every in-progress session that has at least one answer.
pub async fn complete_answered(
    auth: AuthArchitect,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let count = ClientSessionRepo::complete_with_answers(&state.pool, auth.architect_id).await?;
    tracing::info!(architect_id = %auth.architect_id, count, "Completed answered sessions");
    Ok(Json(DataResponse {
        data: StatusUpdateResult { count },
    }))
}

/// GET /api/v1/client-sessions/{id}/pdf
///
/// Printable HTML report, shown inline.
pub async fn report(
    auth: AuthArchitect,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = ClientSessionRepo::find_detail(&state.pool, id)
        .await?
        .filter(|d| d.session.architect_id == auth.architect_id)
        .ok_or_else(|| AppError::not_found("ClientSession", id))?;

    let html = report::render_session_report(&state.pool, &detail).await?;
    let disposition = format!(
        "inline; filename=\"{}\"",
        report::report_filename(&detail.session.first_name, &detail.session.last_name)
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        html,
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Apply a status transition, tolerating a concurrent writer that got
/// there first.
async fn transition(
    state: &AppState,
    session: ClientSession,
    target: SessionStatus,
) -> AppResult<ClientSession> {
    let from = SessionStatus::from_name(&session.status)?;
    if check_transition(from, target)? == Transition::AlreadyThere {
        return Ok(session);
    }

    if let Some(updated) = ClientSessionRepo::leave_in_progress(&state.pool, session.id, target.as_str()).await? {
        tracing::info!(session_id = %updated.id, status = %updated.status, "Session status changed");
        return Ok(updated);
    }

    // Someone else moved the session between our read and our write.
    let current = ClientSessionRepo::find_by_id(&state.pool, session.id)
        .await?
        .ok_or_else(|| AppError::not_found("ClientSession", session.id))?;
    match check_transition(SessionStatus::from_name(&current.status)?, target)? {
        Transition::AlreadyThere => Ok(current),
        Transition::Apply => Err(AppError::InternalError(format!(
            "Session {} could not leave in_progress",
            current.id
        ))),
    }
}

/// Extract the room id list from the room selection body.
fn parse_room_selection(body: &serde_json::Value) -> Result<Vec<String>, CoreError> {
    let field = body
        .get("selected_room_types")
        .or_else(|| body.get("selectedRoomTypes"));

    let Some(serde_json::Value::Array(items)) = field else {
        return Err(CoreError::Validation(
            "selected_room_types must be an array".into(),
        ));
    };

    let mut ids = Vec::with_capacity(items.len());
    for item in items {
        let serde_json::Value::String(id) = item else {
            return Err(CoreError::Validation(
                "selected_room_types must only contain strings".into(),
            ));
        };
        let id = id.trim();
        if !id.is_empty() && !ids.iter().any(|existing: &String| existing == id) {
            ids.push(id.to_string());
        }
    }
    Ok(ids)
}

/// Room selection entries are room type ids.
fn parse_room_ids(selection: &[String]) -> Result<Vec<DbId>, CoreError> {
    selection
        .iter()
        .map(|raw| {
            raw.parse::<DbId>()
                .map_err(|_| CoreError::Validation(format!("Invalid room type id: {raw}")))
        })
        .collect()
}
