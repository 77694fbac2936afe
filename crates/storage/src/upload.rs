use archimatch_core::upload::{generate_upload_filename, validate_image_upload};
use serde::Serialize;

use crate::error::StorageError;
use crate::ObjectStore;

/// Result of a successful image upload, returned as-is to the client.
#[derive(Debug, Clone, Serialize)]
pub struct UploadedImage {
    pub url: String,
    pub filename: String,
    pub size: usize,
    #[serde(rename = "type")]
    pub content_type: String,
}

/// Validate an image and store it under a fresh unique filename.
///
/// Nothing is written when validation fails.
pub async fn upload_image(
    store: &dyn ObjectStore,
    bytes: Vec<u8>,
    mime_type: &str,
    original_name: &str,
) -> Result<UploadedImage, StorageError> {
    validate_image_upload(mime_type, bytes.len())?;

    let filename = generate_upload_filename(original_name, chrono::Utc::now());
    let size = bytes.len();
    let url = store.put(&filename, bytes, mime_type).await?;

    tracing::info!(backend = store.name(), %filename, size, "Stored uploaded image");

    Ok(UploadedImage {
        url,
        filename,
        size,
        content_type: mime_type.to_string(),
    })
}
