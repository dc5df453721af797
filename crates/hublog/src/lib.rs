//! # hublog
//!
//! The unified API for the hublog data hub - named channels holding
//! append-only item logs with hypermedia navigation links.
//!
//! ## Overview
//!
//! hublog provides a storage-agnostic core for a hub service:
//!
//! - **Channels**: Named, append-only ordered logs; created once, never
//!   destroyed
//! - **Items**: Immutable payloads with a preserved content-type, identified
//!   by a strictly increasing per-channel [`ContentKey`]
//! - **Links**: Derived `self`/`previous`/`next`/`first`/`last` relations,
//!   computed at read time from an item's log position
//! - **Validation**: Structured rejections with stable reason codes
//!
//! ## Key Concepts
//!
//! - **Item**: Immutable. Never edited. A channel only grows at the tail.
//! - **ContentKey**: Monotonic per channel, even under concurrent appends
//!   and backwards clock steps.
//! - **Previous link**: Present exactly when a strict predecessor exists;
//!   the first item of a channel carries no trace of it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hublog::{Hub, HubConfig};
//! use hublog::store::SqliteStore;
//! use bytes::Bytes;
//!
//! async fn example() {
//!     let store = SqliteStore::open("hub.db").unwrap();
//!     let hub = Hub::new(store, HubConfig::default());
//!
//!     let channel = hub.create_channel("abc123", b"{}").await.unwrap();
//!
//!     let item = hub
//!         .append("abc123", Some("text/plain"), Bytes::from_static(b"FIRST ITEM"))
//!         .await
//!         .unwrap();
//!
//!     // First item: no previous relation anywhere
//!     assert!(item.links.navigation_header(hub.base_uri()).is_none());
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `hublog::core` - Core primitives (ChannelName, ContentKey, Links, ...)
//! - `hublog::store` - Storage abstraction, SQLite and in-memory stores

pub mod error;
pub mod hub;

// Re-export component crates
pub use hublog_core as core;
pub use hublog_store as store;

// Re-export main types for convenience
pub use error::{ErrorClass, HubError, Result};
pub use hub::{ChannelResource, Hub, HubConfig, ItemResource};

// Re-export commonly used core types
pub use hublog_core::{
    Channel, ChannelName, ContentKey, Item, KeyMinter, Link, Links, NavRelation, ValidationError,
};
