//! Route definitions for architect accounts.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::architect;
use crate::state::AppState;

/// Routes mounted at `/architects`.
///
/// ```text
/// POST   /register                                 -> register
/// POST   /login                                    -> login
/// GET    /me                                       -> me
/// PUT    /me/password                              -> change_password
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(architect::register))
        .route("/login", post(architect::login))
        .route("/me", get(architect::me))
        .route("/me/password", put(architect::change_password))
}
