//! SQLite implementation of the Store trait.
//!
//! The primary storage backend for hublog. Uses rusqlite with bundled
//! SQLite, wrapped in async via tokio::spawn_blocking. The connection mutex
//! doubles as the append critical section: reading the tail key and
//! inserting the new row happen without interleaving.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::trace;

use hublog_core::{Channel, ChannelName, ContentKey, Item};

use crate::error::{Result, StoreError};
use crate::migration;
use crate::traits::{CreateOutcome, Store};

/// SQLite-based store implementation.
///
/// Thread-safe via an internal Mutex around the connection. All operations
/// run under `spawn_blocking` to avoid blocking the async runtime.
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory SQLite database.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run a closure against the connection on the blocking pool.
    async fn blocking<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(|e| sqlite_failure(&format!("mutex poisoned: {e}")))?;
            f(&conn)
        })
        .await
        .map_err(|e| sqlite_failure(&format!("spawn_blocking failed: {e}")))?
    }
}

fn sqlite_failure(msg: &str) -> StoreError {
    StoreError::Database(rusqlite::Error::SqliteFailure(
        rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_ERROR),
        Some(msg.to_string()),
    ))
}

const ITEM_COLUMNS: &str = "channel, millis, seq, content_type, payload, inserted_at";

type ItemRow = (String, i64, i64, String, Vec<u8>, i64);

fn read_item_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ItemRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
    ))
}

fn item_from_row((channel, millis, seq, content_type, payload, inserted_at): ItemRow) -> Result<Item> {
    let channel = ChannelName::parse(&channel)
        .map_err(|e| StoreError::InvalidData(format!("bad channel name in storage: {e}")))?;
    Ok(Item {
        channel,
        key: ContentKey::new(millis, seq as u64),
        content_type,
        payload: Bytes::from(payload),
        inserted_at,
    })
}

#[async_trait]
impl Store for SqliteStore {
    async fn create_channel(&self, name: &ChannelName, now: i64) -> Result<CreateOutcome> {
        let name = name.clone();

        self.blocking(move |conn| {
            let existing: Option<i64> = conn
                .query_row(
                    "SELECT created_at FROM channels WHERE name = ?1",
                    params![name.as_str()],
                    |row| row.get(0),
                )
                .optional()?;

            if let Some(created_at) = existing {
                return Ok(CreateOutcome::Existing(Channel::new(name, created_at)));
            }

            conn.execute(
                "INSERT INTO channels (name, created_at) VALUES (?1, ?2)",
                params![name.as_str(), now],
            )?;
            trace!(channel = %name, "channel created");

            Ok(CreateOutcome::Created(Channel::new(name, now)))
        })
        .await
    }

    async fn get_channel(&self, name: &ChannelName) -> Result<Option<Channel>> {
        let name = name.clone();

        self.blocking(move |conn| {
            let created_at: Option<i64> = conn
                .query_row(
                    "SELECT created_at FROM channels WHERE name = ?1",
                    params![name.as_str()],
                    |row| row.get(0),
                )
                .optional()?;

            Ok(created_at.map(|at| Channel::new(name, at)))
        })
        .await
    }

    async fn list_channels(&self) -> Result<Vec<ChannelName>> {
        self.blocking(|conn| {
            let mut stmt = conn.prepare("SELECT name FROM channels ORDER BY name")?;
            let names = stmt
                .query_map([], |row| row.get::<_, String>(0))?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            names
                .iter()
                .map(|n| {
                    ChannelName::parse(n).map_err(|e| {
                        StoreError::InvalidData(format!("bad channel name in storage: {e}"))
                    })
                })
                .collect()
        })
        .await
    }

    async fn append(
        &self,
        name: &ChannelName,
        content_type: &str,
        payload: Bytes,
        now: i64,
    ) -> Result<Item> {
        let name = name.clone();
        let content_type = content_type.to_string();

        self.blocking(move |conn| {
            let exists: bool = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM channels WHERE name = ?1)",
                params![name.as_str()],
                |row| row.get(0),
            )?;
            if !exists {
                return Err(StoreError::ChannelNotFound(name));
            }

            // Tail key and insert share the connection critical section, so
            // the allocated key is strictly greater than every stored key.
            let last: Option<(i64, i64)> = conn
                .query_row(
                    "SELECT millis, seq FROM items WHERE channel = ?1
                     ORDER BY millis DESC, seq DESC LIMIT 1",
                    params![name.as_str()],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )
                .optional()?;

            let key = ContentKey::after(last.map(|(m, s)| ContentKey::new(m, s as u64)), now);

            conn.execute(
                "INSERT INTO items (channel, millis, seq, content_type, payload, inserted_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    name.as_str(),
                    key.millis(),
                    key.seq() as i64,
                    content_type,
                    payload.as_ref(),
                    now,
                ],
            )?;
            trace!(channel = %name, %key, "item appended");

            Ok(Item {
                channel: name,
                key,
                content_type,
                payload,
                inserted_at: now,
            })
        })
        .await
    }

    async fn get_item(&self, name: &ChannelName, key: ContentKey) -> Result<Option<Item>> {
        let name = name.clone();

        self.blocking(move |conn| {
            conn.query_row(
                &format!(
                    "SELECT {ITEM_COLUMNS} FROM items
                     WHERE channel = ?1 AND millis = ?2 AND seq = ?3"
                ),
                params![name.as_str(), key.millis(), key.seq() as i64],
                read_item_row,
            )
            .optional()?
            .map(item_from_row)
            .transpose()
        })
        .await
    }

    async fn predecessor_of(&self, name: &ChannelName, key: ContentKey) -> Result<Option<Item>> {
        let name = name.clone();

        self.blocking(move |conn| {
            conn.query_row(
                &format!(
                    "SELECT {ITEM_COLUMNS} FROM items
                     WHERE channel = ?1
                       AND (millis < ?2 OR (millis = ?2 AND seq < ?3))
                     ORDER BY millis DESC, seq DESC LIMIT 1"
                ),
                params![name.as_str(), key.millis(), key.seq() as i64],
                read_item_row,
            )
            .optional()?
            .map(item_from_row)
            .transpose()
        })
        .await
    }

    async fn successor_of(&self, name: &ChannelName, key: ContentKey) -> Result<Option<Item>> {
        let name = name.clone();

        self.blocking(move |conn| {
            conn.query_row(
                &format!(
                    "SELECT {ITEM_COLUMNS} FROM items
                     WHERE channel = ?1
                       AND (millis > ?2 OR (millis = ?2 AND seq > ?3))
                     ORDER BY millis ASC, seq ASC LIMIT 1"
                ),
                params![name.as_str(), key.millis(), key.seq() as i64],
                read_item_row,
            )
            .optional()?
            .map(item_from_row)
            .transpose()
        })
        .await
    }

    async fn bounds(&self, name: &ChannelName) -> Result<Option<(ContentKey, ContentKey)>> {
        let name = name.clone();

        self.blocking(move |conn| {
            let first: Option<(i64, i64)> = conn
                .query_row(
                    "SELECT millis, seq FROM items WHERE channel = ?1
                     ORDER BY millis ASC, seq ASC LIMIT 1",
                    params![name.as_str()],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )
                .optional()?;
            let last: Option<(i64, i64)> = conn
                .query_row(
                    "SELECT millis, seq FROM items WHERE channel = ?1
                     ORDER BY millis DESC, seq DESC LIMIT 1",
                    params![name.as_str()],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )
                .optional()?;

            Ok(first.zip(last).map(|((fm, fs), (lm, ls))| {
                (
                    ContentKey::new(fm, fs as u64),
                    ContentKey::new(lm, ls as u64),
                )
            }))
        })
        .await
    }
}
