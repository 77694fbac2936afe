//! Answer value encoding.
//!
//! Answers are stored as raw text. Multi-value answers (multiselect,
//! checkbox lists) arrive as JSON arrays and are stored JSON-encoded so they
//! can be decoded back into the same list.

use serde_json::Value;

use crate::error::CoreError;
use crate::question::QuestionType;

/// Maximum stored length of an answer.
pub const MAX_ANSWER_LEN: usize = 10_000;

/// Encode a submitted answer into its stored text form.
///
/// - strings are stored verbatim
/// - arrays are JSON-encoded
/// - numbers and booleans are stored as their JSON text
/// - `null` and objects are rejected
pub fn encode_answer_value(value: &Value) -> Result<String, CoreError> {
    let encoded = match value {
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Number(_) | Value::Bool(_) => value.to_string(),
        Value::Null => {
            return Err(CoreError::Validation("answer_value is required".into()));
        }
        Value::Object(_) => {
            return Err(CoreError::Validation(
                "answer_value must be a string, number, boolean or array".into(),
            ));
        }
    };

    if encoded.len() > MAX_ANSWER_LEN {
        return Err(CoreError::Validation(format!(
            "answer_value must be at most {MAX_ANSWER_LEN} bytes"
        )));
    }
    Ok(encoded)
}

/// Check that a submitted answer has the shape its question expects.
///
/// Only multi-value questions take lists, and a multiselect always takes
/// one. A checkbox may be a single box, so a scalar is fine there too.
pub fn check_answer_shape(question_type: QuestionType, value: &Value) -> Result<(), CoreError> {
    let is_list = value.is_array();
    if is_list && !question_type.is_multi_value() {
        return Err(CoreError::Validation(format!(
            "A {} question takes a single answer",
            question_type.as_str()
        )));
    }
    if !is_list && question_type == QuestionType::Multiselect {
        return Err(CoreError::Validation(
            "A multiselect question takes a list of answers".into(),
        ));
    }
    Ok(())
}

/// Render a stored answer for humans: JSON arrays of strings are joined
/// with `", "`, anything else is returned unchanged.
pub fn display_answer_value(stored: &str) -> String {
    if stored.starts_with('[') {
        if let Ok(items) = serde_json::from_str::<Vec<String>>(stored) {
            return items.join(", ");
        }
    }
    stored.to_string()
}
