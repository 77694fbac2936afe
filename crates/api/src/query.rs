//! Shared query parameter types for API handlers.

use archimatch_core::error::CoreError;
use archimatch_core::types::DbId;
use serde::Deserialize;

/// `?include_children=` on the room type list.
#[derive(Debug, Deserialize)]
pub struct IncludeChildrenParams {
    #[serde(default)]
    pub include_children: bool,
}

/// `?room_type_id=` on the question list.
#[derive(Debug, Deserialize)]
pub struct QuestionListParams {
    pub room_type_id: Option<DbId>,
}

/// Filters of the inspiration photo lists.
///
/// `selected_room_ids` is either a JSON array (`["id1","id2"]`) or a
/// comma-separated list (`id1,id2`).
#[derive(Debug, Deserialize)]
pub struct PhotoListParams {
    pub session_id: Option<DbId>,
    pub selected_room_ids: Option<String>,
}

/// `?session_id=` (required).
#[derive(Debug, Deserialize)]
pub struct SessionIdParams {
    pub session_id: DbId,
}

/// Parse a list of ids given as a JSON array or as comma-separated values.
/// Blank entries are skipped.
pub fn parse_id_list(raw: &str) -> Result<Vec<DbId>, CoreError> {
    let raw = raw.trim();
    let parts: Vec<String> = if raw.starts_with('[') {
        serde_json::from_str(raw)
            .map_err(|e| CoreError::Validation(format!("Invalid id list: {e}")))?
    } else {
        raw.split(',').map(str::to_string).collect()
    };

    parts
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<DbId>()
                .map_err(|_| CoreError::Validation(format!("Invalid id '{s}'")))
        })
        .collect()
}
