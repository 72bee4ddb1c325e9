//! # XH-01 Address Codec
//!
//! Deterministic transforms between the two identity spaces of the node.
//!
//! **Component ID:** 01
//! **Architecture:** Domain + pure algorithms
//!
//! ## Purpose
//!
//! - Native accounts: checksummed base-58 text parameterized by a network prefix
//! - Mirror accounts: 20-byte Ethereum-style addresses with mixed-case checksums
//! - Native -> mirror truncation and mirror -> native derivation (lossy round trip)
//! - Synthetic mirror addresses for collections and tokens (nesting owners)
//!
//! ## Module Structure
//!
//! ```text
//! xh-01-address-codec/
//! ├── domain/          # CrossIdentity, IdentitySpace, NetworkPrefix, errors
//! └── algorithms/      # native text, checksum, mirror mapping, nesting
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;

// Re-exports
pub use algorithms::{
    checksum_mirror, collection_id_from_address, collection_id_to_address, decode_account,
    decode_native, encode_native, encode_with_prefix, is_valid_native, mirror_to_native,
    native_to_mirror, normalize_native, parse_mirror, to_checksum_address,
    token_id_from_address, token_id_to_address,
};
pub use domain::{CodecError, CrossIdentity, IdentitySpace, MirrorAddress, NativeKey, NetworkPrefix};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    #[allow(clippy::const_is_empty)]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_prefix() -> impl Strategy<Value = u16> {
        (0u16..=NetworkPrefix::MAX).prop_filter("reserved prefix", |p| *p != 46 && *p != 47)
    }

    fn arb_key() -> impl Strategy<Value = Vec<u8>> {
        prop_oneof![
            prop::collection::vec(any::<u8>(), 1),
            prop::collection::vec(any::<u8>(), 2),
            prop::collection::vec(any::<u8>(), 4),
            prop::collection::vec(any::<u8>(), 8),
            prop::collection::vec(any::<u8>(), 32),
            prop::collection::vec(any::<u8>(), 33),
        ]
    }

    fn arb_identity() -> impl Strategy<Value = CrossIdentity> {
        prop_oneof![
            (any::<[u8; 32]>(), arb_prefix()).prop_map(|(key, prefix)| {
                CrossIdentity::Native(encode_native(&key, prefix).unwrap())
            }),
            any::<[u8; 20]>().prop_map(|address| CrossIdentity::from_mirror_bytes(&address)),
        ]
    }

    proptest! {
        #[test]
        fn prop_native_encoding_roundtrip(key in arb_key(), prefix in arb_prefix()) {
            let text = encode_native(&key, prefix).unwrap();
            let (raw, decoded_prefix) = decode_native(&text).unwrap();
            prop_assert_eq!(raw, key);
            prop_assert_eq!(decoded_prefix.value(), prefix);
        }

        #[test]
        fn prop_checksum_depends_only_on_lowercase(address in any::<[u8; 20]>()) {
            let lower = format!("0x{}", hex::encode(address));
            let upper = format!("0x{}", hex::encode_upper(address));
            let first = to_checksum_address(&lower).unwrap();
            prop_assert_eq!(&first, &to_checksum_address(&lower).unwrap());
            prop_assert_eq!(&first, &to_checksum_address(&upper).unwrap());
            prop_assert_eq!(first.to_lowercase(), lower);
        }

        #[test]
        fn prop_token_address_injective(
            a in (any::<u32>(), any::<u32>()),
            b in (any::<u32>(), any::<u32>()),
        ) {
            let left = token_id_to_address(a.0, a.1);
            prop_assert_eq!(&left, &token_id_to_address(a.0, a.1));
            if a != b {
                prop_assert_ne!(left, token_id_to_address(b.0, b.1));
            }
        }

        #[test]
        fn prop_normalize_idempotent(id in arb_identity(), prefix in arb_prefix()) {
            let prefix = NetworkPrefix::new(prefix).unwrap();
            let once = id.normalize(prefix).unwrap();
            let twice = once.normalize(prefix).unwrap();
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_checksum_changes_case_for_nontrivial_address() {
        let lower = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";
        assert_ne!(to_checksum_address(lower).unwrap(), lower);
    }
}
