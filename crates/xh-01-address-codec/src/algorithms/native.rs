//! # Native Address Encoding
//!
//! Self-describing checksummed base-58 text for native account keys:
//!
//! ```text
//! base58( prefix(1|2) ++ raw_key ++ blake2b_512("SS58PRE" ++ prefix ++ raw_key)[..1|2] )
//! ```
//!
//! The checksum is two bytes for 32/33-byte keys and one byte otherwise.

use crate::domain::{CodecError, NetworkPrefix};
use blake2::{Blake2b512, Digest};

/// Hash context prepended to every checksum preimage.
const CHECKSUM_CONTEXT: &[u8] = b"SS58PRE";

/// Raw key lengths the text format can carry.
pub const ALLOWED_KEY_LENGTHS: [usize; 6] = [1, 2, 4, 8, 32, 33];

fn checksum_len(key_len: usize) -> usize {
    if key_len == 32 || key_len == 33 {
        2
    } else {
        1
    }
}

fn checksum(payload: &[u8]) -> [u8; 64] {
    let mut hasher = Blake2b512::new();
    hasher.update(CHECKSUM_CONTEXT);
    hasher.update(payload);

    let mut hash = [0u8; 64];
    hash.copy_from_slice(&hasher.finalize());
    hash
}

/// Encode a raw key as native text under `prefix`.
pub fn encode_native(raw_key: &[u8], prefix: u16) -> Result<String, CodecError> {
    let prefix = NetworkPrefix::new(prefix)?;
    encode_with_prefix(raw_key, prefix)
}

/// Encode a raw key under an already validated prefix.
pub fn encode_with_prefix(raw_key: &[u8], prefix: NetworkPrefix) -> Result<String, CodecError> {
    if !ALLOWED_KEY_LENGTHS.contains(&raw_key.len()) {
        return Err(CodecError::InvalidKeyLength(raw_key.len()));
    }

    let mut payload = prefix.to_bytes();
    payload.extend_from_slice(raw_key);

    let hash = checksum(&payload);
    payload.extend_from_slice(&hash[..checksum_len(raw_key.len())]);

    Ok(bs58::encode(payload).into_string())
}

/// Decode native text into its raw key and network prefix.
///
/// Verifies the embedded checksum.
pub fn decode_native(text: &str) -> Result<(Vec<u8>, NetworkPrefix), CodecError> {
    let data = bs58::decode(text)
        .into_vec()
        .map_err(|e| CodecError::InvalidBase58(e.to_string()))?;

    let (prefix, prefix_len) = NetworkPrefix::from_bytes(&data)?;

    // Key length is implied by the total length; every allowed length maps
    // to a distinct total.
    let key_len = ALLOWED_KEY_LENGTHS
        .iter()
        .copied()
        .find(|len| prefix_len + len + checksum_len(*len) == data.len())
        .ok_or(CodecError::InvalidKeyLength(
            data.len().saturating_sub(prefix_len),
        ))?;

    let body_len = prefix_len + key_len;
    let hash = checksum(&data[..body_len]);
    if data[body_len..] != hash[..checksum_len(key_len)] {
        return Err(CodecError::InvalidChecksum);
    }

    Ok((data[prefix_len..body_len].to_vec(), prefix))
}

/// Decode native text carrying a 32-byte account key.
pub fn decode_account(text: &str) -> Result<([u8; 32], NetworkPrefix), CodecError> {
    let (raw, prefix) = decode_native(text)?;
    let key: [u8; 32] = raw
        .as_slice()
        .try_into()
        .map_err(|_| CodecError::InvalidKeyLength(raw.len()))?;
    Ok((key, prefix))
}

/// Check whether `text` is well-formed native text.
pub fn is_valid_native(text: &str) -> bool {
    decode_native(text).is_ok()
}

/// Re-encode native text under `prefix`.
pub fn normalize_native(text: &str, prefix: NetworkPrefix) -> Result<String, CodecError> {
    let (raw, _) = decode_native(text)?;
    encode_with_prefix(&raw, prefix)
}
