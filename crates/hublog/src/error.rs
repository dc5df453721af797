//! Error types for the Hub.

use hublog_core::{ChannelName, ContentKey, ValidationError};
use hublog_store::StoreError;
use thiserror::Error;

/// Errors that can occur during Hub operations.
#[derive(Debug, Error)]
pub enum HubError {
    /// Malformed input; never committed any state.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Channel not found.
    #[error("channel not found: {0}")]
    ChannelNotFound(ChannelName),

    /// Item not found.
    #[error("item not found: {channel}/{key}")]
    ItemNotFound {
        channel: ChannelName,
        key: ContentKey,
    },
}

/// Boundary classification of an error.
///
/// Lets an HTTP layer pick a status family without matching on variants.
/// `Conflict` is reserved for stricter name-collision policies; the default
/// idempotent creation never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    BadRequest,
    NotFound,
    Conflict,
    Internal,
}

impl HubError {
    /// Classify this error for the boundary layer.
    ///
    /// Invalid input and missing resources stay distinguishable: callers can
    /// tell "your input was invalid" apart from "the resource you reference
    /// doesn't exist".
    pub fn classification(&self) -> ErrorClass {
        match self {
            HubError::Validation(_) => ErrorClass::BadRequest,
            HubError::ChannelNotFound(_) | HubError::ItemNotFound { .. } => ErrorClass::NotFound,
            HubError::Store(StoreError::ChannelNotFound(_)) => ErrorClass::NotFound,
            HubError::Store(_) => ErrorClass::Internal,
        }
    }
}

/// Result type for Hub operations.
pub type Result<T> = std::result::Result<T, HubError>;
