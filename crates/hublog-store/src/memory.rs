//! In-memory implementation of the Store trait.
//!
//! Same semantics as SQLite but nothing survives drop. The registry is a
//! read-mostly map of per-channel shards; each shard carries its own lock
//! and key minter, so appends to different channels never contend.

use std::collections::{BTreeMap, HashMap};
use std::ops::Bound::{Excluded, Unbounded};
use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;
use bytes::Bytes;
use tracing::trace;

use hublog_core::{Channel, ChannelName, ContentKey, Item, KeyMinter};

use crate::error::{Result, StoreError};
use crate::traits::{CreateOutcome, Store};

/// In-memory store implementation.
pub struct MemoryStore {
    channels: RwLock<HashMap<ChannelName, Arc<Mutex<ChannelShard>>>>,
}

/// One channel's metadata, minter, and ordered log, guarded as a unit.
struct ChannelShard {
    meta: Channel,
    minter: KeyMinter,
    log: BTreeMap<ContentKey, StoredItem>,
}

struct StoredItem {
    content_type: String,
    payload: Bytes,
    inserted_at: i64,
}

impl ChannelShard {
    fn item(&self, key: ContentKey, stored: &StoredItem) -> Item {
        Item {
            channel: self.meta.name.clone(),
            key,
            content_type: stored.content_type.clone(),
            payload: stored.payload.clone(),
            inserted_at: stored.inserted_at,
        }
    }
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            channels: RwLock::new(HashMap::new()),
        }
    }

    fn shard(&self, name: &ChannelName) -> Option<Arc<Mutex<ChannelShard>>> {
        self.channels.read().unwrap().get(name).cloned()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_channel(&self, name: &ChannelName, now: i64) -> Result<CreateOutcome> {
        let mut channels = self.channels.write().unwrap();

        if let Some(shard) = channels.get(name) {
            let meta = shard.lock().unwrap().meta.clone();
            return Ok(CreateOutcome::Existing(meta));
        }

        let meta = Channel::new(name.clone(), now);
        channels.insert(
            name.clone(),
            Arc::new(Mutex::new(ChannelShard {
                meta: meta.clone(),
                minter: KeyMinter::new(),
                log: BTreeMap::new(),
            })),
        );
        trace!(channel = %name, "channel created");

        Ok(CreateOutcome::Created(meta))
    }

    async fn get_channel(&self, name: &ChannelName) -> Result<Option<Channel>> {
        Ok(self
            .shard(name)
            .map(|shard| shard.lock().unwrap().meta.clone()))
    }

    async fn list_channels(&self) -> Result<Vec<ChannelName>> {
        let mut names: Vec<ChannelName> =
            self.channels.read().unwrap().keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    async fn append(
        &self,
        name: &ChannelName,
        content_type: &str,
        payload: Bytes,
        now: i64,
    ) -> Result<Item> {
        let shard = self
            .shard(name)
            .ok_or_else(|| StoreError::ChannelNotFound(name.clone()))?;

        // Mint and insert under the channel's own lock: the key is at the
        // tail and no concurrent append on this channel can interleave.
        let mut shard = shard.lock().unwrap();
        let key = shard.minter.next(now);
        shard.log.insert(
            key,
            StoredItem {
                content_type: content_type.to_string(),
                payload,
                inserted_at: now,
            },
        );
        trace!(channel = %name, %key, "item appended");

        let stored = &shard.log[&key];
        Ok(shard.item(key, stored))
    }

    async fn get_item(&self, name: &ChannelName, key: ContentKey) -> Result<Option<Item>> {
        let Some(shard) = self.shard(name) else {
            return Ok(None);
        };
        let shard = shard.lock().unwrap();
        Ok(shard.log.get(&key).map(|stored| shard.item(key, stored)))
    }

    async fn predecessor_of(&self, name: &ChannelName, key: ContentKey) -> Result<Option<Item>> {
        let Some(shard) = self.shard(name) else {
            return Ok(None);
        };
        let shard = shard.lock().unwrap();
        Ok(shard
            .log
            .range(..key)
            .next_back()
            .map(|(&k, stored)| shard.item(k, stored)))
    }

    async fn successor_of(&self, name: &ChannelName, key: ContentKey) -> Result<Option<Item>> {
        let Some(shard) = self.shard(name) else {
            return Ok(None);
        };
        let shard = shard.lock().unwrap();
        Ok(shard
            .log
            .range((Excluded(key), Unbounded))
            .next()
            .map(|(&k, stored)| shard.item(k, stored)))
    }

    async fn bounds(&self, name: &ChannelName) -> Result<Option<(ContentKey, ContentKey)>> {
        let Some(shard) = self.shard(name) else {
            return Ok(None);
        };
        let shard = shard.lock().unwrap();
        let first = shard.log.keys().next().copied();
        let last = shard.log.keys().next_back().copied();
        Ok(first.zip(last))
    }
}
