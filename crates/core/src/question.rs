//! Question types and option validation.
//!
//! Questions are attached to a room type and rendered by the wizard
//! according to their type. Choice types carry a list of options which is
//! persisted as a JSON array; every other type stores no options.

use crate::error::CoreError;

/// Valid `question_type` values, in the order the admin UI offers them.
pub const VALID_QUESTION_TYPES: &[&str] = &[
    "text",
    "textarea",
    "number",
    "select",
    "multiselect",
    "radio",
    "checkbox",
    "range",
];

/// Maximum length of a question text.
pub const MAX_QUESTION_TEXT_LEN: usize = 1000;

/// The input widget a question is answered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionType {
    Text,
    Textarea,
    Number,
    Select,
    Multiselect,
    Radio,
    Checkbox,
    Range,
}

impl QuestionType {
    /// Parse from the stored / submitted name.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "text" => Ok(Self::Text),
            "textarea" => Ok(Self::Textarea),
            "number" => Ok(Self::Number),
            "select" => Ok(Self::Select),
            "multiselect" => Ok(Self::Multiselect),
            "radio" => Ok(Self::Radio),
            "checkbox" => Ok(Self::Checkbox),
            "range" => Ok(Self::Range),
            other => Err(CoreError::Validation(format!(
                "Invalid question type '{other}'. Must be one of: {}",
                VALID_QUESTION_TYPES.join(", ")
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Select => "select",
            Self::Multiselect => "multiselect",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Range => "range",
        }
    }

    /// Types that need at least one option to be answerable.
    pub fn requires_options(self) -> bool {
        matches!(self, Self::Select | Self::Multiselect | Self::Radio)
    }

    /// Types whose options are kept when supplied. A checkbox question may
    /// be a single yes/no box or a list of boxes.
    pub fn accepts_options(self) -> bool {
        self.requires_options() || self == Self::Checkbox
    }

    /// Types whose answers are lists and get JSON-encoded.
    pub fn is_multi_value(self) -> bool {
        matches!(self, Self::Multiselect | Self::Checkbox)
    }
}

/// Validate and trim a question text.
pub fn validate_question_text(text: &str) -> Result<String, CoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Question text is required".into()));
    }
    if trimmed.chars().count() > MAX_QUESTION_TEXT_LEN {
        return Err(CoreError::Validation(format!(
            "Question text must be at most {MAX_QUESTION_TEXT_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Normalize the options for a question of type `question_type`.
///
/// Options are trimmed and blank entries dropped. Returns `None` for types
/// that do not take options, and rejects choice types left without any.
pub fn normalize_options(
    question_type: QuestionType,
    options: Option<&[String]>,
) -> Result<Option<Vec<String>>, CoreError> {
    if !question_type.accepts_options() {
        return Ok(None);
    }

    let cleaned: Vec<String> = options
        .unwrap_or_default()
        .iter()
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect();

    if cleaned.is_empty() {
        if question_type.requires_options() {
            return Err(CoreError::Validation(format!(
                "Question type '{}' requires at least one option",
                question_type.as_str()
            )));
        }
        return Ok(None);
    }

    Ok(Some(cleaned))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parses_every_valid_type() {
        for name in VALID_QUESTION_TYPES {
            let parsed = QuestionType::from_name(name).expect("valid type");
            assert_eq!(parsed.as_str(), *name);
        }
    }

    #[test]
    fn rejects_unknown_type() {
        assert_matches!(
            QuestionType::from_name("slider"),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn select_requires_options() {
        let result = normalize_options(QuestionType::Select, Some(&[]));
        assert_matches!(result, Err(CoreError::Validation(_)));

        let blank = vec!["   ".to_string()];
        let result = normalize_options(QuestionType::Radio, Some(&blank));
        assert_matches!(result, Err(CoreError::Validation(_)));
    }

    #[test]
    fn options_are_trimmed() {
        let opts = vec![" Moderne ".to_string(), "".to_string(), "Classique".to_string()];
        let result = normalize_options(QuestionType::Select, Some(&opts)).unwrap();
        assert_eq!(
            result,
            Some(vec!["Moderne".to_string(), "Classique".to_string()])
        );
    }

    #[test]
    fn options_dropped_for_free_text() {
        let opts = vec!["ignored".to_string()];
        assert_eq!(normalize_options(QuestionType::Text, Some(&opts)).unwrap(), None);
        assert_eq!(normalize_options(QuestionType::Range, None).unwrap(), None);
    }

    #[test]
    fn checkbox_options_are_optional() {
        assert_eq!(normalize_options(QuestionType::Checkbox, None).unwrap(), None);
        let opts = vec!["Oui".to_string()];
        assert_eq!(
            normalize_options(QuestionType::Checkbox, Some(&opts)).unwrap(),
            Some(vec!["Oui".to_string()])
        );
    }

    #[test]
    fn blank_text_rejected() {
        assert_matches!(validate_question_text("  "), Err(CoreError::Validation(_)));
        assert_eq!(validate_question_text(" Quel style? ").unwrap(), "Quel style?");
    }
}
