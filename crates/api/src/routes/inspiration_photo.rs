//! Route definitions for the architect's photo library.
//!
//! The wizard-facing photo board is mounted under `/client-sessions/{id}/photos`
//! by [`super::client_session::router`].

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::inspiration_photo;
use crate::state::AppState;

/// Routes mounted at `/inspiration-photos`.
///
/// ```text
/// GET    /                                         -> list
/// POST   /                                         -> create
/// PUT    /{id}                                     -> update
/// DELETE /{id}                                     -> deactivate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(inspiration_photo::list).post(inspiration_photo::create),
        )
        .route(
            "/{id}",
            put(inspiration_photo::update).delete(inspiration_photo::deactivate),
        )
}
