//! Route definitions for client sessions.
//!
//! Wizard steps are public and keyed by the session id. Listing, deletion,
//! abandonment and the report require an architect token.

use axum::routing::{get, patch, post, put};
use axum::Router;

use crate::handlers::{client_session, inspiration_photo};
use crate::state::AppState;

/// Routes mounted at `/client-sessions`.
///
/// ```text
/// GET    /                                         -> list
/// POST   /                                         -> create
/// POST   /update-status                            -> complete_answered
/// GET    /{id}                                     -> get_by_id
/// DELETE /{id}                                     -> delete
/// PUT    /{id}/general-info                        -> update_general_info
/// PUT    /{id}/room-selection                      -> set_room_selection
/// PATCH  /{id}/complete                            -> complete
/// PATCH  /{id}/abandon                             -> abandon
/// GET    /{id}/photos                              -> inspiration_photo::list_for_session
/// POST   /{id}/photos                              -> inspiration_photo::create_for_session
/// GET    /{id}/pdf                                 -> report
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(client_session::list).post(client_session::create))
        .route("/update-status", post(client_session::complete_answered))
        .route(
            "/{id}",
            get(client_session::get_by_id).delete(client_session::delete),
        )
        .route("/{id}/general-info", put(client_session::update_general_info))
        .route("/{id}/room-selection", put(client_session::set_room_selection))
        .route("/{id}/complete", patch(client_session::complete))
        .route("/{id}/abandon", patch(client_session::abandon))
        .route(
            "/{id}/photos",
            get(inspiration_photo::list_for_session).post(inspiration_photo::create_for_session),
        )
        .route("/{id}/pdf", get(client_session::report))
}
