use axum::routing::post;
use axum::Router;

use crate::handlers::client_answer;
use crate::state::AppState;

/// Routes mounted at `/client-answers`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(client_answer::upsert))
}
