//! # hublog Core
//!
//! Pure primitives for the hublog data hub: channels, content keys, items,
//! and link resolution.
//!
//! This crate contains no I/O and no storage. It is pure computation over
//! the hub's data model.
//!
//! ## Key Types
//!
//! - [`ChannelName`] - Validated identity of a channel
//! - [`ContentKey`] - Strictly increasing per-channel item identifier
//! - [`KeyMinter`] - Allocates the next [`ContentKey`] for a channel
//! - [`Item`] - An immutable payload appended to a channel
//! - [`Links`] - Derived navigation relations for a stored resource
//!
//! ## Validation
//!
//! Creation requests and append requests are checked by the [`validation`]
//! module; rejections carry a stable reason code for the boundary layer.

pub mod channel;
pub mod error;
pub mod item;
pub mod key;
pub mod link;
pub mod validation;

pub use channel::{Channel, ChannelName, MAX_NAME_BYTES};
pub use error::ValidationError;
pub use item::Item;
pub use key::{ContentKey, KeyMinter, ParseKeyError};
pub use link::{ItemRef, Link, Links, NavRelation, Reference};
pub use validation::{validate_channel_name, validate_content_type, validate_creation_body};
