//! JWT-based authentication extractor for Axum handlers.

use archimatch_core::error::CoreError;
use archimatch_core::types::DbId;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated architect extracted from the `Authorization: Bearer` header.
///
/// Every repository call made on behalf of this extractor is scoped to
/// `architect_id`; the tenant never comes from the request body.
#[derive(Debug, Clone)]
pub struct AuthArchitect {
    /// The architect's id (from `claims.sub`).
    pub architect_id: DbId,
}

impl FromRequestParts<AppState> for AuthArchitect {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthArchitect {
            architect_id: claims.sub,
        })
    }
}
