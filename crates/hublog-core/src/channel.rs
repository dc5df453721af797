//! Channel: a named, append-only ordered log of items.
//!
//! A channel is identified by its name alone. Names are validated on
//! construction and immutable afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::validation::validate_channel_name;

/// Maximum channel name length in bytes.
pub const MAX_NAME_BYTES: usize = 48;

/// A validated channel name.
///
/// Non-empty, at most [`MAX_NAME_BYTES`] bytes, restricted to
/// `[A-Za-z0-9_]`. Construction goes through [`ChannelName::parse`] so a
/// value of this type is always well-formed.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelName(String);

impl ChannelName {
    /// Parse and validate a raw name.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        validate_channel_name(raw)?;
        Ok(Self(raw.trim().to_string()))
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChannelName({})", self.0)
    }
}

impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ChannelName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for ChannelName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Channel metadata.
///
/// The log itself lives in the store; this is the registry-visible record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// The channel's immutable name.
    pub name: ChannelName,

    /// When the channel was created (Unix ms).
    pub created_at: i64,
}

impl Channel {
    /// Create a new channel record.
    pub fn new(name: ChannelName, now: i64) -> Self {
        Self {
            name,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_name() {
        let name = ChannelName::parse("abc123").unwrap();
        assert_eq!(name.as_str(), "abc123");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let name = ChannelName::parse("  abc123  ").unwrap();
        assert_eq!(name.as_str(), "abc123");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(
            ChannelName::parse("").unwrap_err(),
            ValidationError::NameMissing
        );
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!(
            ChannelName::parse("   ").unwrap_err(),
            ValidationError::NameBlank
        );
    }

    #[test]
    fn test_parse_rejects_bad_charset() {
        assert!(matches!(
            ChannelName::parse("not a name").unwrap_err(),
            ValidationError::NameInvalidCharacters(_)
        ));
        assert!(matches!(
            ChannelName::parse("slash/name").unwrap_err(),
            ValidationError::NameInvalidCharacters(_)
        ));
    }

    #[test]
    fn test_parse_rejects_too_long() {
        let long = "x".repeat(MAX_NAME_BYTES + 1);
        assert!(matches!(
            ChannelName::parse(&long).unwrap_err(),
            ValidationError::NameTooLong { .. }
        ));
    }

    #[test]
    fn test_underscore_allowed() {
        assert!(ChannelName::parse("under_score_42").is_ok());
    }

    #[test]
    fn test_serde_transparent() {
        let name = ChannelName::parse("abc123").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"abc123\"");
    }
}
