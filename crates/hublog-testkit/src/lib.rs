//! # hublog Testkit
//!
//! Testing utilities for the hublog data hub.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: A ready-made in-memory hub plus helpers for the common
//!   create-then-append setup
//! - **Generators**: Proptest strategies for channel names, content keys,
//!   content-types, and payloads
//!
//! ## Fixtures
//!
//! ```rust
//! use hublog_testkit::fixtures::{random_channel_name, TestFixture};
//!
//! # async fn example() {
//! let fixture = TestFixture::new();
//! let channel = random_channel_name();
//! fixture.make_channel(&channel).await;
//! let item = fixture.append_text(&channel, "FIRST ITEM").await;
//! # }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use hublog_testkit::generators::channel_name;
//!
//! proptest! {
//!     #[test]
//!     fn names_parse(name in channel_name()) {
//!         prop_assert!(hublog::ChannelName::parse(&name).is_ok());
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{random_channel_name, TestFixture};
pub use generators::{channel_name, content_key, content_type, payload};
