//! Handler for `POST /upload` (multipart image upload).

use archimatch_core::error::CoreError;
use archimatch_core::upload::MAX_UPLOAD_BYTES;
use archimatch_storage::upload_image;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body ceiling for the upload route: the largest accepted image
/// plus room for the multipart framing.
pub const UPLOAD_BODY_LIMIT: usize = MAX_UPLOAD_BYTES + 1024 * 1024;

/// POST /api/v1/upload
///
/// Multipart form with a single `file` field. The image is validated
/// before anything is written to storage.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut file: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("file") {
            continue; // ignore unknown fields
        }
        let original_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().unwrap_or("").to_string();
        let data = field.bytes().await.map_err(multipart_error)?;
        file = Some((original_name, content_type, data.to_vec()));
    }

    let (original_name, content_type, data) =
        file.ok_or_else(|| AppError::Core(CoreError::Validation("No file provided".into())))?;

    let uploaded = upload_image(state.store.as_ref(), data, &content_type, &original_name).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: uploaded })))
}

/// An oversized body is a validation failure like any other oversized file.
fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::Core(CoreError::Validation(format!(
            "The file is too large (max {MAX_UPLOAD_BYTES} bytes)"
        )));
    }
    AppError::BadRequest(err.body_text())
}
