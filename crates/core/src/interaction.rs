//! Photo interactions: like / dislike plus spatial annotations.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ACTION_LIKE: &str = "like";
pub const ACTION_DISLIKE: &str = "dislike";

/// Maximum number of annotations a client may pin on one photo.
pub const MAX_ANNOTATIONS_PER_PHOTO: usize = 50;

/// Maximum length of a single annotation comment.
pub const MAX_ANNOTATION_COMMENT_LEN: usize = 2000;

/// A client's verdict on an inspiration photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoAction {
    Like,
    Dislike,
}

impl PhotoAction {
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            ACTION_LIKE => Ok(Self::Like),
            ACTION_DISLIKE => Ok(Self::Dislike),
            other => Err(CoreError::Validation(format!(
                "Invalid action '{other}'. Must be one of: {ACTION_LIKE}, {ACTION_DISLIKE}"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Like => ACTION_LIKE,
            Self::Dislike => ACTION_DISLIKE,
        }
    }
}

/// A comment pinned on a photo. `x` and `y` are percentages of the
/// rendered width and height, so they survive resizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub comment: String,
}

/// Validate a list of annotations.
pub fn validate_annotations(annotations: &[Annotation]) -> Result<(), CoreError> {
    if annotations.len() > MAX_ANNOTATIONS_PER_PHOTO {
        return Err(CoreError::Validation(format!(
            "At most {MAX_ANNOTATIONS_PER_PHOTO} annotations per photo"
        )));
    }
    for (i, a) in annotations.iter().enumerate() {
        for (axis, value) in [("x", a.x), ("y", a.y)] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(CoreError::Validation(format!(
                    "Annotation {i}: {axis} must be a percentage between 0 and 100, got {value}"
                )));
            }
        }
        if a.comment.chars().count() > MAX_ANNOTATION_COMMENT_LEN {
            return Err(CoreError::Validation(format!(
                "Annotation {i}: comment must be at most {MAX_ANNOTATION_COMMENT_LEN} characters"
            )));
        }
    }
    Ok(())
}
