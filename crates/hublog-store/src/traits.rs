//! Store trait: the abstract interface for channel and item persistence.
//!
//! This trait keeps the hub storage-agnostic. Implementations include
//! SQLite (primary) and in-memory (tests, ephemeral hubs).

use async_trait::async_trait;
use bytes::Bytes;

use hublog_core::{Channel, ChannelName, ContentKey, Item};

use crate::error::Result;

/// Result of creating a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The channel did not exist and was created.
    Created(Channel),
    /// The channel already existed; returned unchanged (idempotent).
    Existing(Channel),
}

impl CreateOutcome {
    /// The channel record, regardless of outcome.
    pub fn channel(&self) -> &Channel {
        match self {
            CreateOutcome::Created(c) | CreateOutcome::Existing(c) => c,
        }
    }

    /// Whether this call created the channel.
    pub fn was_created(&self) -> bool {
        matches!(self, CreateOutcome::Created(_))
    }
}

/// The Store trait: async interface for hub persistence.
///
/// All methods are async to support both sync (SQLite) and async backends.
/// For SQLite, work runs under `spawn_blocking` to avoid blocking the
/// runtime.
///
/// # Design Notes
///
/// - **Linearized appends**: key allocation and tail insert for one channel
///   happen under that channel's critical section, so two concurrent appends
///   never receive colliding or order-inverted keys.
/// - **Typed absence**: lookups return `Ok(None)` for missing channels or
///   items; only `append` treats a missing channel as an error, because it
///   cannot otherwise report where the item would have gone.
/// - **Immediate visibility**: a created channel is visible to `get_channel`
///   as soon as `create_channel` returns.
#[async_trait]
pub trait Store: Send + Sync {
    // ─────────────────────────────────────────────────────────────────────────
    // Channel Registry
    // ─────────────────────────────────────────────────────────────────────────

    /// Create a channel, or return the existing one with the same name.
    async fn create_channel(&self, name: &ChannelName, now: i64) -> Result<CreateOutcome>;

    /// Get a channel's metadata by name.
    async fn get_channel(&self, name: &ChannelName) -> Result<Option<Channel>>;

    /// List all channel names.
    async fn list_channels(&self) -> Result<Vec<ChannelName>>;

    // ─────────────────────────────────────────────────────────────────────────
    // Item Log
    // ─────────────────────────────────────────────────────────────────────────

    /// Append an item to the tail of a channel's log.
    ///
    /// Allocates the next [`ContentKey`] for the channel and stores the
    /// payload and content-type verbatim. Errors with
    /// [`StoreError::ChannelNotFound`] if the channel does not exist.
    ///
    /// [`StoreError::ChannelNotFound`]: crate::error::StoreError::ChannelNotFound
    async fn append(
        &self,
        name: &ChannelName,
        content_type: &str,
        payload: Bytes,
        now: i64,
    ) -> Result<Item>;

    /// Get an item by its position in a channel.
    async fn get_item(&self, name: &ChannelName, key: ContentKey) -> Result<Option<Item>>;

    /// The item immediately preceding `key` in strict key order.
    ///
    /// `None` when `key` is the first item (or the channel is unknown).
    async fn predecessor_of(&self, name: &ChannelName, key: ContentKey) -> Result<Option<Item>>;

    /// The item immediately following `key` in strict key order.
    async fn successor_of(&self, name: &ChannelName, key: ContentKey) -> Result<Option<Item>>;

    /// The first and last keys of a channel's log.
    ///
    /// `None` when the channel is empty or unknown.
    async fn bounds(&self, name: &ChannelName) -> Result<Option<(ContentKey, ContentKey)>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_outcome_accessors() {
        let name = ChannelName::parse("abc123").unwrap();
        let channel = Channel::new(name, 1000);

        let created = CreateOutcome::Created(channel.clone());
        assert!(created.was_created());
        assert_eq!(created.channel(), &channel);

        let existing = CreateOutcome::Existing(channel.clone());
        assert!(!existing.was_created());
        assert_eq!(existing.channel(), &channel);
    }
}
