//! Error types for hublog core.

use thiserror::Error;

/// Rejection reasons for malformed creation and append requests.
///
/// Every variant maps to a client-error classification at the boundary and
/// carries a stable reason code via [`ValidationError::code`]. Validation
/// failures are distinct from lookup failures: "your input was invalid" is
/// never reported as "not found".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("channel name wasn't given")]
    NameMissing,

    #[error("channel name cannot be blank")]
    NameBlank,

    #[error("channel name is too long: {len} bytes (max {max})")]
    NameTooLong { len: usize, max: usize },

    #[error("channel name {0:?} must only contain characters a-z, A-Z, 0-9 and underscore")]
    NameInvalidCharacters(String),

    #[error("creation request body cannot be empty")]
    EmptyBody,

    #[error("a content-type is required to append an item")]
    ContentTypeMissing,
}

impl ValidationError {
    /// Stable reason code for boundary layers.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::NameMissing => "NAME_MISSING",
            ValidationError::NameBlank => "NAME_BLANK",
            ValidationError::NameTooLong { .. } => "NAME_TOO_LONG",
            ValidationError::NameInvalidCharacters(_) => "NAME_INVALID",
            ValidationError::EmptyBody => "EMPTY_BODY",
            ValidationError::ContentTypeMissing => "CONTENT_TYPE_MISSING",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(ValidationError::EmptyBody.code(), "EMPTY_BODY");
        assert_eq!(
            ValidationError::NameTooLong { len: 49, max: 48 }.code(),
            "NAME_TOO_LONG"
        );
    }

    #[test]
    fn test_messages_name_the_problem() {
        let msg = ValidationError::NameInvalidCharacters("a b".into()).to_string();
        assert!(msg.contains("a b"));
    }
}
