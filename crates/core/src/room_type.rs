//! Room type naming and tree rules.
//!
//! Room types form a two-level tree per architect: categories at the root,
//! selectable rooms underneath.

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum length of a room type name.
pub const MAX_ROOM_TYPE_NAME_LEN: usize = 200;

/// Validate and trim a room type name.
pub fn validate_room_type_name(name: &str) -> Result<String, CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Room type name is required".into()));
    }
    if trimmed.chars().count() > MAX_ROOM_TYPE_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Room type name must be at most {MAX_ROOM_TYPE_NAME_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Ensure `parent_id` can hold children: only root categories may.
///
/// `grandparent_id` is the `parent_id` of the proposed parent row.
pub fn validate_parent_is_root(parent_id: DbId, grandparent_id: Option<DbId>) -> Result<(), CoreError> {
    match grandparent_id {
        None => Ok(()),
        Some(_) => Err(CoreError::Validation(format!(
            "Room type {parent_id} is not a category; room types only nest one level deep"
        ))),
    }
}
