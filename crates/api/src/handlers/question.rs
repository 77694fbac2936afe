//! Handlers for the `/questions` resource.

use archimatch_core::error::CoreError;
use archimatch_core::question::{normalize_options, validate_question_text, QuestionType};
use archimatch_core::types::DbId;
use archimatch_db::models::question::{CreateQuestion, QuestionFields, UpdateQuestion};
use archimatch_db::repositories::{QuestionRepo, RoomTypeRepo};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthArchitect;
use crate::query::QuestionListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/questions?room_type_id=
pub async fn list(
    auth: AuthArchitect,
    State(state): State<AppState>,
    Query(params): Query<QuestionListParams>,
) -> AppResult<impl IntoResponse> {
    let questions = QuestionRepo::list(&state.pool, auth.architect_id, params.room_type_id).await?;
    Ok(Json(DataResponse { data: questions }))
}

/// POST /api/v1/questions
pub async fn create(
    auth: AuthArchitect,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateQuestion>,
) -> AppResult<impl IntoResponse> {
    let question_text = validate_question_text(input.question_text.as_deref().unwrap_or_default())?;
    let question_type = parse_type(input.question_type.as_deref())?;
    let options = normalize_options(question_type, input.options.as_deref())?;

    RoomTypeRepo::find_by_id(&state.pool, auth.architect_id, input.room_type_id)
        .await?
        .filter(|rt| rt.is_active)
        .ok_or_else(|| AppError::not_found("RoomType", input.room_type_id))?;

    let fields = QuestionFields {
        question_text,
        question_type: question_type.as_str().to_string(),
        options,
        required: input.required.unwrap_or(true),
        display_order: input.display_order.unwrap_or(0),
        is_active: true,
    };
    let question = QuestionRepo::create(&state.pool, input.room_type_id, &fields).await?;

    tracing::info!(architect_id = %auth.architect_id, question_id = %question.id, "Question created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: question })))
}

/// PUT /api/v1/questions/{id}
///
/// Absent fields keep their value. Options are re-validated against the
/// resulting type, so switching a question to `select` without options
/// is rejected.
pub async fn update(
    auth: AuthArchitect,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateQuestion>,
) -> AppResult<impl IntoResponse> {
    let existing = QuestionRepo::find_by_id(&state.pool, auth.architect_id, id)
        .await?
        .ok_or_else(|| AppError::not_found("Question", id))?;

    let question_text = match input.question_text.as_deref() {
        Some(text) => validate_question_text(text)?,
        None => existing.question_text.clone(),
    };
    let question_type = match input.question_type.as_deref() {
        Some(name) => parse_type(Some(name))?,
        None => QuestionType::from_name(&existing.question_type)?,
    };
    let current_options = existing.options.as_ref().map(|o| o.0.clone());
    let options = normalize_options(
        question_type,
        input.options.as_deref().or(current_options.as_deref()),
    )?;

    let fields = QuestionFields {
        question_text,
        question_type: question_type.as_str().to_string(),
        options,
        required: input.required.unwrap_or(existing.required),
        display_order: input.display_order.unwrap_or(existing.display_order),
        is_active: input.is_active.unwrap_or(existing.is_active),
    };

    let question = QuestionRepo::update(&state.pool, auth.architect_id, id, &fields)
        .await?
        .ok_or_else(|| AppError::not_found("Question", id))?;
    Ok(Json(DataResponse { data: question }))
}

/// DELETE /api/v1/questions/{id}
///
/// Soft delete; answers already given keep pointing at the question.
pub async fn deactivate(
    auth: AuthArchitect,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    QuestionRepo::deactivate(&state.pool, auth.architect_id, id)
        .await?
        .ok_or_else(|| AppError::not_found("Question", id))?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_type(name: Option<&str>) -> Result<QuestionType, CoreError> {
    match name.map(str::trim) {
        None | Some("") => Err(CoreError::Validation("Question type is required".into())),
        Some(name) => QuestionType::from_name(name),
    }
}
