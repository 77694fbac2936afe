//! Handler for `/client-answers` (wizard questionnaire step).

use archimatch_core::answer::{check_answer_shape, encode_answer_value};
use archimatch_core::question::QuestionType;
use archimatch_db::models::client_answer::UpsertClientAnswer;
use archimatch_db::repositories::{ClientAnswerRepo, ClientSessionRepo, QuestionRepo};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/client-answers
///
/// Insert or replace the answer of a session to a question. The question
/// must be active, sit in an active room type of the session's architect
/// and receive an answer of the right shape.
pub async fn upsert(
    State(state): State<AppState>,
    AppJson(input): AppJson<UpsertClientAnswer>,
) -> AppResult<impl IntoResponse> {
    let answer_value = encode_answer_value(&input.answer_value)?;

    let session = ClientSessionRepo::find_by_id(&state.pool, input.session_id)
        .await?
        .ok_or_else(|| AppError::not_found("ClientSession", input.session_id))?;

    let question = QuestionRepo::find_answerable(&state.pool, session.architect_id, input.question_id)
        .await?
        .ok_or_else(|| AppError::not_found("Question", input.question_id))?;
    check_answer_shape(QuestionType::from_name(&question.question_type)?, &input.answer_value)?;

    let answer =
        ClientAnswerRepo::upsert(&state.pool, session.id, input.question_id, &answer_value).await?;
    tracing::debug!(session_id = %session.id, question_id = %input.question_id, "Answer saved");
    Ok(Json(DataResponse { data: answer }))
}
