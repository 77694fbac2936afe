use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::upload::{self, UPLOAD_BODY_LIMIT};
use crate::state::AppState;

/// Routes mounted at `/upload`. The body limit leaves room for the
/// multipart framing around a maximum-size image.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(upload::upload))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
}
