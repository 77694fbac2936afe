use axum::routing::{get, put};
use axum::Router;

use crate::handlers::question;
use crate::state::AppState;

/// Routes mounted at `/questions`.
///
/// ```text
/// GET    /                                         -> list
/// POST   /                                         -> create
/// PUT    /{id}                                     -> update
/// DELETE /{id}                                     -> deactivate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(question::list).post(question::create))
        .route("/{id}", put(question::update).delete(question::deactivate))
}
