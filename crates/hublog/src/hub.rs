//! The Hub: unified API for the hublog data hub.
//!
//! The Hub ties validation, the channel registry, the item log, and link
//! resolution into one interface an HTTP boundary can call directly.

use std::sync::Arc;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::debug;

use hublog_core::{
    validate_content_type, validate_creation_body, Channel, ChannelName, ContentKey, Item, Links,
};
use hublog_store::{Store, StoreError};

use crate::error::{HubError, Result};

/// Configuration for the Hub.
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Base URI used to render absolute link URLs.
    pub base_uri: String,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            base_uri: "http://localhost:8080".to_string(),
        }
    }
}

/// A channel together with its derived links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelResource {
    pub channel: Channel,
    #[serde(rename = "_links")]
    pub links: Links,
}

/// An item together with its derived navigation links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemResource {
    pub item: Item,
    #[serde(rename = "_links")]
    pub links: Links,
}

/// The main Hub struct.
///
/// Provides a unified API for:
/// - Creating and looking up channels
/// - Appending items
/// - Retrieving items with navigation links
pub struct Hub<S: Store> {
    store: Arc<S>,
    config: HubConfig,
}

impl<S: Store> Hub<S> {
    /// Create a new hub over the given store.
    pub fn new(store: S, config: HubConfig) -> Self {
        Self {
            store: Arc::new(store),
            config,
        }
    }

    /// The store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Base URI for absolute link rendering.
    pub fn base_uri(&self) -> &str {
        &self.config.base_uri
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Channel Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Create a channel.
    ///
    /// The request body must be non-empty; the name must satisfy the channel
    /// naming rules. Creating an existing name is idempotent and returns the
    /// existing channel unchanged. The channel is visible to lookups the
    /// moment this returns.
    pub async fn create_channel(&self, name: &str, body: &[u8]) -> Result<ChannelResource> {
        validate_creation_body(body)?;
        let name = ChannelName::parse(name)?;

        let outcome = self.store.create_channel(&name, now_millis()).await?;
        if outcome.was_created() {
            debug!(channel = %name, "channel created");
        }

        let channel = outcome.channel().clone();
        Ok(ChannelResource {
            links: Links::for_channel(&channel.name),
            channel,
        })
    }

    /// Look up a channel by name.
    pub async fn channel(&self, name: &str) -> Result<ChannelResource> {
        let name = ChannelName::parse(name)?;
        let channel = self
            .store
            .get_channel(&name)
            .await?
            .ok_or(HubError::ChannelNotFound(name))?;

        Ok(ChannelResource {
            links: Links::for_channel(&channel.name),
            channel,
        })
    }

    /// List all channel names.
    pub async fn channels(&self) -> Result<Vec<ChannelName>> {
        Ok(self.store.list_channels().await?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Item Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Append an item to a channel.
    ///
    /// A content-type is required and preserved verbatim. The returned
    /// resource already carries the item's links, including `previous` when
    /// a predecessor exists.
    pub async fn append(
        &self,
        name: &str,
        content_type: Option<&str>,
        payload: Bytes,
    ) -> Result<ItemResource> {
        let content_type = validate_content_type(content_type)?.to_string();
        let name = ChannelName::parse(name)?;

        let item = self
            .store
            .append(&name, &content_type, payload, now_millis())
            .await
            .map_err(|e| match e {
                StoreError::ChannelNotFound(n) => HubError::ChannelNotFound(n),
                other => HubError::Store(other),
            })?;
        debug!(channel = %name, key = %item.key, "item appended");

        let links = self.links_for(&item).await?;
        Ok(ItemResource { item, links })
    }

    /// Retrieve an item with its full navigation links.
    pub async fn item(&self, name: &str, key: ContentKey) -> Result<ItemResource> {
        let name = ChannelName::parse(name)?;
        let item = self
            .store
            .get_item(&name, key)
            .await?
            .ok_or_else(|| HubError::ItemNotFound {
                channel: name.clone(),
                key,
            })?;

        let links = self.links_for(&item).await?;
        Ok(ItemResource { item, links })
    }

    /// Compute the link set for an item from its neighbors and the
    /// channel's bounds. Indexed lookups only; the log is never scanned.
    async fn links_for(&self, item: &Item) -> Result<Links> {
        let previous = self
            .store
            .predecessor_of(&item.channel, item.key)
            .await?
            .map(|i| i.key);
        let next = self
            .store
            .successor_of(&item.channel, item.key)
            .await?
            .map(|i| i.key);
        let bounds = self.store.bounds(&item.channel).await?;

        Ok(Links::for_item(&item.item_ref(), previous, next, bounds))
    }
}

/// Get current time in milliseconds.
fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_millis() as i64
}
