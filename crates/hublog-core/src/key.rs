//! Content keys: per-channel item identifiers.
//!
//! A key is a `(millis, seq)` pair ordered first by wall-clock milliseconds
//! and then by a monotonic counter. The counter breaks ties between appends
//! landing in the same millisecond and absorbs backwards clock steps, so the
//! sequence handed out for one channel is strictly increasing no matter what
//! the clock does.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Identifier of an item within a channel.
///
/// Totally ordered; the derived `Ord` on `(millis, seq)` is the log order.
/// Renders as `"{millis}-{seq}"` for use in resource URLs and parses back
/// via [`FromStr`].
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ContentKey {
    millis: i64,
    seq: u64,
}

impl ContentKey {
    /// Create a key from its parts.
    pub const fn new(millis: i64, seq: u64) -> Self {
        Self { millis, seq }
    }

    /// Wall-clock component (Unix ms).
    pub const fn millis(&self) -> i64 {
        self.millis
    }

    /// Tie-break counter within the millisecond.
    pub const fn seq(&self) -> u64 {
        self.seq
    }

    /// The key that follows `last` given the current clock reading.
    ///
    /// Used by stores that recover the tail from durable state instead of
    /// keeping a [`KeyMinter`] in memory. Guarantees `result > last`.
    pub fn after(last: Option<ContentKey>, now_millis: i64) -> Self {
        match last {
            Some(last) if now_millis <= last.millis => Self::new(last.millis, last.seq + 1),
            _ => Self::new(now_millis, 0),
        }
    }
}

impl fmt::Debug for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentKey({}-{})", self.millis, self.seq)
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.millis, self.seq)
    }
}

/// Error parsing a [`ContentKey`] from its string form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed content key: {0:?}")]
pub struct ParseKeyError(pub String);

impl FromStr for ContentKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (millis, seq) = s.split_once('-').ok_or_else(|| ParseKeyError(s.into()))?;
        let millis: i64 = millis.parse().map_err(|_| ParseKeyError(s.into()))?;
        let seq: u64 = seq.parse().map_err(|_| ParseKeyError(s.into()))?;
        if millis < 0 {
            return Err(ParseKeyError(s.into()));
        }
        Ok(Self { millis, seq })
    }
}

/// Allocates strictly increasing keys for a single channel.
///
/// A minter is owned by the channel's storage shard and must only be called
/// under that channel's lock; the lock is what makes allocation atomic with
/// respect to other appends on the same channel. Allocation itself cannot
/// fail.
#[derive(Debug, Default, Clone)]
pub struct KeyMinter {
    last: Option<ContentKey>,
}

impl KeyMinter {
    /// Create a minter with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from the last key observed in durable state.
    pub fn resume(last: Option<ContentKey>) -> Self {
        Self { last }
    }

    /// Allocate the next key.
    ///
    /// Strictly greater than every key previously returned by this minter,
    /// even when `now_millis` repeats or moves backwards.
    pub fn next(&mut self, now_millis: i64) -> ContentKey {
        let key = ContentKey::after(self.last, now_millis);
        self.last = Some(key);
        key
    }

    /// The most recently allocated key, if any.
    pub fn last(&self) -> Option<ContentKey> {
        self.last
    }
}
