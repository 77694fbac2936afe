use axum::routing::get;
use axum::Router;

use crate::handlers::photo_interaction;
use crate::state::AppState;

/// Routes mounted at `/photo-interactions`.
///
/// ```text
/// GET    /?session_id=                             -> list
/// POST   /                                         -> upsert
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(photo_interaction::list).post(photo_interaction::upsert),
    )
}
