//! Image upload limits and stored filename generation.

use rand::Rng;

use crate::error::CoreError;

/// Largest accepted upload (10 MiB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Required MIME type prefix.
pub const IMAGE_MIME_PREFIX: &str = "image/";

/// Length of the random part of a stored filename.
const RANDOM_SUFFIX_LEN: usize = 7;

/// Extension used when the original name has none we can keep.
const FALLBACK_EXTENSION: &str = "bin";

/// Reject anything that is not an image or is larger than [`MAX_UPLOAD_BYTES`].
pub fn validate_image_upload(mime_type: &str, size: usize) -> Result<(), CoreError> {
    if !mime_type.starts_with(IMAGE_MIME_PREFIX) {
        return Err(CoreError::Validation(format!(
            "The file must be an image (got '{mime_type}')"
        )));
    }
    if size == 0 {
        return Err(CoreError::Validation("The file is empty".into()));
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(CoreError::Validation(format!(
            "The file is too large ({size} bytes, max {MAX_UPLOAD_BYTES})"
        )));
    }
    Ok(())
}

/// Lower-cased extension of `original_name`, restricted to short ASCII
/// alphanumerics so it is safe in object keys and paths.
pub fn file_extension(original_name: &str) -> String {
    match original_name.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty()
                && !ext.is_empty()
                && ext.len() <= 10
                && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            ext.to_ascii_lowercase()
        }
        _ => FALLBACK_EXTENSION.to_string(),
    }
}

/// Build a collision-resistant stored filename:
/// `<unix millis>-<random alnum>.<ext>`.
pub fn generate_upload_filename(original_name: &str, now: chrono::DateTime<chrono::Utc>) -> String {
    let suffix: String = rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(RANDOM_SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();
    format!(
        "{}-{suffix}.{}",
        now.timestamp_millis(),
        file_extension(original_name)
    )
}
