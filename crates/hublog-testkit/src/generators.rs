//! Proptest generators for property-based testing.

use proptest::prelude::*;

use hublog_core::ContentKey;

/// Generate a valid channel name.
pub fn channel_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_]{1,48}".prop_map(String::from)
}

/// Generate a random ContentKey.
pub fn content_key() -> impl Strategy<Value = ContentKey> {
    (0i64..=1_700_000_000_000i64, 0u64..=1000u64).prop_map(|(millis, seq)| ContentKey::new(millis, seq))
}

/// Generate a plausible content-type.
pub fn content_type() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("text/plain".to_string()),
        Just("application/json".to_string()),
        Just("application/octet-stream".to_string()),
        Just("text/plain; charset=utf-8".to_string()),
        "[a-z]{3,12}/[a-z0-9.+-]{3,20}".prop_map(String::from),
    ]
}

/// Generate payload bytes of specified max length.
pub fn payload(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hublog_core::{ChannelName, KeyMinter};

    proptest! {
        #[test]
        fn test_generated_names_parse(name in channel_name()) {
            prop_assert!(ChannelName::parse(&name).is_ok());
        }

        #[test]
        fn test_key_order_matches_mint_order(
            readings in prop::collection::vec(0i64..=1_700_000_000_000, 2..50)
        ) {
            let mut minter = KeyMinter::new();
            let keys: Vec<ContentKey> = readings.iter().map(|&now| minter.next(now)).collect();

            let mut sorted = keys.clone();
            sorted.sort();
            prop_assert_eq!(keys, sorted);
        }

        #[test]
        fn test_key_roundtrip(key in content_key()) {
            prop_assert_eq!(key.to_string().parse::<ContentKey>().unwrap(), key);
        }
    }
}
