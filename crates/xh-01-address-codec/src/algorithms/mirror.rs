//! # Identity Space Mapping
//!
//! Native -> mirror keeps the first 20 bytes of the account key.
//! Mirror -> native hashes `"evm:" ++ mirror` with blake2b-256 and encodes the
//! digest as a native account.
//!
//! The two directions are not inverses: mapping a native key to its mirror and
//! back yields a different (derived) native account.

use super::native::encode_with_prefix;
use crate::domain::{CodecError, MirrorAddress, NativeKey, NetworkPrefix};
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

type Blake2b256 = Blake2b<U32>;

/// Preimage tag for mirror-derived native accounts.
const MIRROR_ACCOUNT_TAG: &[u8] = b"evm:";

/// Truncate a native account key to its mirror address.
pub fn native_to_mirror(key: &NativeKey) -> MirrorAddress {
    let mut mirror = [0u8; 20];
    mirror.copy_from_slice(&key[..20]);
    mirror
}

/// Derive the native account key backing a mirror address.
pub fn mirror_to_native_key(mirror: &MirrorAddress) -> NativeKey {
    let mut hasher = Blake2b256::new();
    hasher.update(MIRROR_ACCOUNT_TAG);
    hasher.update(mirror);

    let mut key = [0u8; 32];
    key.copy_from_slice(&hasher.finalize());
    key
}

/// Derive the native text address backing a mirror address.
///
/// Uses the generic prefix when `prefix` is `None`.
pub fn mirror_to_native(
    mirror: &MirrorAddress,
    prefix: Option<NetworkPrefix>,
) -> Result<String, CodecError> {
    let key = mirror_to_native_key(mirror);
    encode_with_prefix(&key, prefix.unwrap_or_default())
}
