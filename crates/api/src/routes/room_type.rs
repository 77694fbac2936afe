//! Route definitions for room types.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::room_type;
use crate::state::AppState;

/// Routes mounted at `/room-types`.
///
/// ```text
/// GET    /                                         -> list
/// POST   /                                         -> create
/// POST   /seed-default                             -> seed_default
/// PUT    /{id}                                     -> update
/// DELETE /{id}                                     -> deactivate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(room_type::list).post(room_type::create))
        .route("/seed-default", post(room_type::seed_default))
        .route("/{id}", put(room_type::update).delete(room_type::deactivate))
}
