//! Link resolution: derived navigation relations for hub resources.
//!
//! Links are computed from an item's position at read time and never stored.
//! A relation is either present with a concrete target or absent entirely;
//! there is no null link.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::channel::ChannelName;
use crate::key::ContentKey;

/// Navigation relation tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavRelation {
    /// The resource itself.
    SelfRel,
    /// Immediately preceding item in the channel's log.
    Previous,
    /// Immediately following item in the channel's log.
    Next,
    /// Oldest item in the channel.
    First,
    /// Newest item in the channel.
    Last,
}

impl NavRelation {
    /// The relation token as it appears in a link header.
    pub fn as_str(&self) -> &'static str {
        match self {
            NavRelation::SelfRel => "self",
            NavRelation::Previous => "previous",
            NavRelation::Next => "next",
            NavRelation::First => "first",
            NavRelation::Last => "last",
        }
    }
}

impl fmt::Display for NavRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Addressable reference to one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRef {
    pub channel: ChannelName,
    pub key: ContentKey,
}

/// Target of a link: a channel, or an item within one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reference {
    Channel(ChannelName),
    Item(ItemRef),
}

impl Reference {
    /// Path component of the resource URL, rooted at the hub base.
    pub fn path(&self) -> String {
        match self {
            Reference::Channel(name) => format!("/channel/{name}"),
            Reference::Item(item) => format!("/channel/{}/{}", item.channel, item.key),
        }
    }
}

/// A single navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: NavRelation,
    pub target: Reference,
}

impl Link {
    fn item(rel: NavRelation, channel: &ChannelName, key: ContentKey) -> Self {
        Self {
            rel,
            target: Reference::Item(ItemRef {
                channel: channel.clone(),
                key,
            }),
        }
    }

    /// Absolute URL of the target.
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.target.path())
    }

    /// Machine-readable header form: `<url>;rel="relation"`.
    pub fn header_value(&self, base: &str) -> String {
        format!("<{}>;rel=\"{}\"", self.url(base), self.rel)
    }
}

/// The full link set for a resource.
///
/// `self` is always present. `previous`/`next` are present iff the neighbor
/// exists; `first`/`last` iff the channel holds at least one item. Absent
/// relations are omitted, not nulled: serialized output and header rendering
/// carry no trace of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: Link,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<Link>,
}

impl Links {
    /// Link set for a channel resource: self only.
    pub fn for_channel(name: &ChannelName) -> Self {
        Self {
            self_link: Link {
                rel: NavRelation::SelfRel,
                target: Reference::Channel(name.clone()),
            },
            previous: None,
            next: None,
            first: None,
            last: None,
        }
    }

    /// Link set for an item, given its neighbors and the channel's bounds.
    pub fn for_item(
        item: &ItemRef,
        previous: Option<ContentKey>,
        next: Option<ContentKey>,
        bounds: Option<(ContentKey, ContentKey)>,
    ) -> Self {
        let channel = &item.channel;
        Self {
            self_link: Link::item(NavRelation::SelfRel, channel, item.key),
            previous: previous.map(|k| Link::item(NavRelation::Previous, channel, k)),
            next: next.map(|k| Link::item(NavRelation::Next, channel, k)),
            first: bounds.map(|(first, _)| Link::item(NavRelation::First, channel, first)),
            last: bounds.map(|(_, last)| Link::item(NavRelation::Last, channel, last)),
        }
    }

    /// All present links, `self` first.
    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        std::iter::once(&self.self_link)
            .chain(self.previous.as_ref())
            .chain(self.next.as_ref())
            .chain(self.first.as_ref())
            .chain(self.last.as_ref())
    }

    /// Whether a relation is present.
    pub fn has(&self, rel: NavRelation) -> bool {
        self.iter().any(|l| l.rel == rel)
    }

    /// The traversal relations (`previous`, `next`) as one comma-joined
    /// header value.
    ///
    /// Returns `None` when neither neighbor exists so the boundary omits the
    /// header entirely rather than sending an empty one.
    pub fn navigation_header(&self, base: &str) -> Option<String> {
        let values: Vec<String> = self
            .previous
            .iter()
            .chain(self.next.iter())
            .map(|l| l.header_value(base))
            .collect();
        if values.is_empty() {
            None
        } else {
            Some(values.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://hub.example.com";

    fn name(s: &str) -> ChannelName {
        ChannelName::parse(s).unwrap()
    }

    fn item_ref(channel: &str, key: ContentKey) -> ItemRef {
        ItemRef {
            channel: name(channel),
            key,
        }
    }

    #[test]
    fn test_channel_links_self_only() {
        let links = Links::for_channel(&name("abc123"));
        assert_eq!(links.self_link.url(BASE), "http://hub.example.com/channel/abc123");
        assert!(links.navigation_header(BASE).is_none());
    }

    #[test]
    fn test_header_value_format() {
        let link = Link::item(NavRelation::Previous, &name("abc123"), ContentKey::new(1000, 0));
        assert_eq!(
            link.header_value(BASE),
            "<http://hub.example.com/channel/abc123/1000-0>;rel=\"previous\""
        );
    }

    #[test]
    fn test_base_trailing_slash() {
        let link = Link::item(NavRelation::SelfRel, &name("abc123"), ContentKey::new(1, 0));
        assert_eq!(
            link.url("http://hub.example.com/"),
            "http://hub.example.com/channel/abc123/1-0"
        );
    }

    #[test]
    fn test_first_item_has_no_previous_anywhere() {
        let key = ContentKey::new(1000, 0);
        let links = Links::for_item(&item_ref("abc123", key), None, None, Some((key, key)));

        assert!(!links.has(NavRelation::Previous));
        assert!(links.navigation_header(BASE).is_none());

        // Nothing "previous"-shaped may leak through serialization either
        let json = serde_json::to_string(&links).unwrap();
        assert!(!json.contains("previous"));
    }

    #[test]
    fn test_second_item_previous_points_at_first() {
        let first = ContentKey::new(1000, 0);
        let second = ContentKey::new(1000, 1);
        let links = Links::for_item(
            &item_ref("abc123", second),
            Some(first),
            None,
            Some((first, second)),
        );

        let first_self = Links::for_item(&item_ref("abc123", first), None, Some(second), Some((first, second)));
        assert_eq!(
            links.navigation_header(BASE).unwrap(),
            format!("<{}>;rel=\"previous\"", first_self.self_link.url(BASE))
        );
    }

    #[test]
    fn test_middle_item_has_both_neighbors() {
        let (a, b, c) = (
            ContentKey::new(1, 0),
            ContentKey::new(2, 0),
            ContentKey::new(3, 0),
        );
        let links = Links::for_item(&item_ref("abc123", b), Some(a), Some(c), Some((a, c)));

        let header = links.navigation_header(BASE).unwrap();
        assert_eq!(
            header,
            "<http://hub.example.com/channel/abc123/1-0>;rel=\"previous\", \
             <http://hub.example.com/channel/abc123/3-0>;rel=\"next\""
        );
        assert!(links.has(NavRelation::First));
        assert!(links.has(NavRelation::Last));
    }

    #[test]
    fn test_iter_self_first() {
        let key = ContentKey::new(1, 0);
        let links = Links::for_item(&item_ref("abc123", key), None, None, Some((key, key)));
        let rels: Vec<NavRelation> = links.iter().map(|l| l.rel).collect();
        assert_eq!(
            rels,
            vec![NavRelation::SelfRel, NavRelation::First, NavRelation::Last]
        );
    }
}
