//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use bytes::Bytes;
use rand::Rng;

use hublog::{Hub, HubConfig, ItemResource};
use hublog_store::MemoryStore;

/// A test fixture wrapping an in-memory hub.
pub struct TestFixture {
    pub hub: Hub<MemoryStore>,
}

impl TestFixture {
    /// Create a new fixture with default configuration.
    pub fn new() -> Self {
        Self {
            hub: Hub::new(MemoryStore::new(), HubConfig::default()),
        }
    }

    /// Create with a specific base URI.
    pub fn with_base_uri(base_uri: &str) -> Self {
        Self {
            hub: Hub::new(
                MemoryStore::new(),
                HubConfig {
                    base_uri: base_uri.to_string(),
                },
            ),
        }
    }

    /// Create a channel, panicking on failure.
    pub async fn make_channel(&self, name: &str) {
        self.hub
            .create_channel(name, b"{}")
            .await
            .expect("fixture channel creation failed");
    }

    /// Append a text/plain item, panicking on failure.
    pub async fn append_text(&self, channel: &str, body: &str) -> ItemResource {
        self.hub
            .append(channel, Some("text/plain"), Bytes::from(body.to_string()))
            .await
            .expect("fixture append failed")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A random valid channel name, for test isolation across runs.
pub fn random_channel_name() -> String {
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();
    let suffix: String = (0..12)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();
    format!("test_{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hublog::NavRelation;

    #[tokio::test]
    async fn test_fixture_create_and_append() {
        let fixture = TestFixture::new();
        let channel = random_channel_name();
        fixture.make_channel(&channel).await;

        let first = fixture.append_text(&channel, "FIRST ITEM").await;
        assert!(!first.links.has(NavRelation::Previous));

        let second = fixture.append_text(&channel, "SECOND ITEM").await;
        assert!(second.links.has(NavRelation::Previous));
    }

    #[tokio::test]
    async fn test_random_names_are_valid_and_distinct() {
        let a = random_channel_name();
        let b = random_channel_name();
        assert_ne!(a, b);
        assert!(hublog::ChannelName::parse(&a).is_ok());
    }

    #[tokio::test]
    async fn test_with_base_uri() {
        let fixture = TestFixture::with_base_uri("https://hub.example.com");
        let channel = random_channel_name();
        fixture.make_channel(&channel).await;

        let item = fixture.append_text(&channel, "x").await;
        assert!(item
            .links
            .self_link
            .url(fixture.hub.base_uri())
            .starts_with("https://hub.example.com/channel/"));
    }
}
