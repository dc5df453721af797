//! Item: an immutable payload stored at one position of a channel's log.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::channel::ChannelName;
use crate::key::ContentKey;
use crate::link::ItemRef;

/// A stored item.
///
/// Identity is `(channel, key)`. The content-type is preserved verbatim from
/// the append request and echoed on retrieval. Items are never edited or
/// removed; the channel name is carried only so links can be built without
/// another lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Owning channel.
    pub channel: ChannelName,

    /// Position in the channel's log.
    pub key: ContentKey,

    /// Content-type supplied at append time, verbatim.
    pub content_type: String,

    /// Raw payload bytes.
    pub payload: Bytes,

    /// When the item was appended (Unix ms).
    pub inserted_at: i64,
}

impl Item {
    /// The item's addressable reference.
    pub fn item_ref(&self) -> ItemRef {
        ItemRef {
            channel: self.channel.clone(),
            key: self.key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_ref() {
        let item = Item {
            channel: ChannelName::parse("abc123").unwrap(),
            key: ContentKey::new(1000, 0),
            content_type: "text/plain".to_string(),
            payload: Bytes::from_static(b"FIRST ITEM"),
            inserted_at: 1000,
        };
        let r = item.item_ref();
        assert_eq!(r.channel.as_str(), "abc123");
        assert_eq!(r.key, ContentKey::new(1000, 0));
    }
}
