//! Handler for `/dashboard/stats`.

use archimatch_db::repositories::ClientSessionRepo;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::AuthArchitect;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard/stats
pub async fn stats(
    auth: AuthArchitect,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let stats = ClientSessionRepo::dashboard_stats(&state.pool, auth.architect_id).await?;
    Ok(Json(DataResponse { data: stats }))
}
