//! Handlers for the `/architects` resource (register, login, profile).

use archimatch_core::error::CoreError;
use archimatch_db::models::architect::{Architect, CreateArchitect};
use archimatch_db::repositories::ArchitectRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthArchitect;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /architects/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    pub password: String,
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,
    #[validate(length(max = 200))]
    pub company: Option<String>,
}

/// Request body for `POST /architects/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `PUT /architects/me/password`.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Successful authentication payload.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub architect: Architect,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/architects/register
pub async fn register(
    State(state): State<AppState>,
    AppJson(mut input): AppJson<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    input.email = input.email.trim().to_string();
    input.name = input.name.trim().to_string();
    input.validate()?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let company = input
        .company
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    let architect = ArchitectRepo::create(
        &state.pool,
        &CreateArchitect {
            email: input.email,
            password_hash,
            name: input.name,
            company,
        },
    )
    .await?;

    tracing::info!(architect_id = %architect.id, "Architect registered");

    let response = auth_response(&state, architect)?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: response })))
}

/// POST /api/v1/architects/login
///
/// Unknown email and wrong password give the same 401.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let invalid = || AppError::Core(CoreError::Unauthorized("Invalid email or password".into()));

    let architect = ArchitectRepo::find_by_email(&state.pool, input.email.trim())
        .await?
        .ok_or_else(invalid)?;

    let valid = verify_password(&input.password, &architect.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !valid {
        tracing::warn!(architect_id = %architect.id, "Failed login attempt");
        return Err(invalid());
    }

    let response = auth_response(&state, architect)?;
    Ok(Json(DataResponse { data: response }))
}

/// GET /api/v1/architects/me
pub async fn me(
    auth: AuthArchitect,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let architect = ArchitectRepo::find_by_id(&state.pool, auth.architect_id)
        .await?
        .ok_or_else(|| AppError::not_found("Architect", auth.architect_id))?;
    Ok(Json(DataResponse { data: architect }))
}

/// PUT /api/v1/architects/me/password
pub async fn change_password(
    auth: AuthArchitect,
    State(state): State<AppState>,
    AppJson(input): AppJson<ChangePasswordRequest>,
) -> AppResult<StatusCode> {
    let architect = ArchitectRepo::find_by_id(&state.pool, auth.architect_id)
        .await?
        .ok_or_else(|| AppError::not_found("Architect", auth.architect_id))?;

    let valid = verify_password(&input.current_password, &architect.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Current password is incorrect".into(),
        )));
    }

    validate_password_strength(&input.new_password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    let hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    ArchitectRepo::update_password(&state.pool, architect.id, &hash).await?;
    tracing::info!(architect_id = %architect.id, "Password changed");
    Ok(StatusCode::NO_CONTENT)
}

fn auth_response(state: &AppState, architect: Architect) -> AppResult<AuthResponse> {
    let jwt = &state.config.jwt;
    let access_token = generate_access_token(architect.id, &architect.email, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    Ok(AuthResponse {
        access_token,
        expires_in: jwt.access_token_expiry_mins * 60,
        architect,
    })
}
