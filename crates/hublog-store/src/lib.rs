//! # hublog Store
//!
//! Storage abstraction for the hublog data hub. Provides a trait-based
//! interface for channel and item persistence with SQLite and in-memory
//! implementations.
//!
//! ## Overview
//!
//! The store module abstracts persistence behind the [`Store`] trait. The
//! primary implementation is [`SqliteStore`], with [`MemoryStore`] for tests
//! and ephemeral hubs.
//!
//! ## Key Types
//!
//! - [`Store`] - The async trait for all storage operations
//! - [`SqliteStore`] - SQLite-based persistent storage
//! - [`MemoryStore`] - In-memory storage
//! - [`CreateOutcome`] - Result of creating a channel
//!
//! ## Design Notes
//!
//! - **Idempotent creation**: Creating an existing channel returns the
//!   existing record unchanged.
//! - **Append-only logs**: Appending is the sole mutating item operation;
//!   the store allocates the item's key at the log tail.
//! - **Indexed neighbors**: Predecessor/successor lookups are range queries
//!   against an ordered index, never full scans.
//! - **Per-channel exclusion**: Appends to one channel are linearized;
//!   independent channels do not contend in [`MemoryStore`].

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::{CreateOutcome, Store};
