//! Request validation: channel-name and payload constraints.
//!
//! Rules reproduce the original service's observable behavior: an empty
//! creation body is a client error, names are restricted to a small charset,
//! and appends must declare a content-type. Payload bytes themselves are
//! unconstrained.

use crate::channel::MAX_NAME_BYTES;
use crate::error::ValidationError;

/// Validate a raw channel name.
///
/// Checks, in order: presence, non-blankness after trimming, length, charset
/// (`[A-Za-z0-9_]`).
pub fn validate_channel_name(raw: &str) -> Result<(), ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::NameMissing);
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::NameBlank);
    }
    if trimmed.len() > MAX_NAME_BYTES {
        return Err(ValidationError::NameTooLong {
            len: trimmed.len(),
            max: MAX_NAME_BYTES,
        });
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ValidationError::NameInvalidCharacters(trimmed.to_string()));
    }
    Ok(())
}

/// Validate a channel-creation request body.
///
/// The body must be non-empty regardless of its declared content-type; its
/// shape is otherwise unconstrained.
pub fn validate_creation_body(body: &[u8]) -> Result<(), ValidationError> {
    if body.is_empty() {
        return Err(ValidationError::EmptyBody);
    }
    Ok(())
}

/// Validate the content-type supplied with an item append.
///
/// Returns the content-type verbatim; it is stored and echoed unchanged on
/// retrieval.
pub fn validate_content_type(content_type: Option<&str>) -> Result<&str, ValidationError> {
    match content_type {
        Some(ct) if !ct.trim().is_empty() => Ok(ct),
        _ => Err(ValidationError::ContentTypeMissing),
    }
}
