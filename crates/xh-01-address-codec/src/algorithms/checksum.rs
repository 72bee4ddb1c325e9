//! # Mirror Checksum Formatting
//!
//! Mixed-case checksum encoding for 20-byte mirror addresses: a hex digit is
//! upper-cased iff the matching nibble of `keccak256(lowercase_hex)` is
//! greater than 7.

use crate::domain::{CodecError, MirrorAddress};
use sha3::{Digest, Keccak256};

/// Parse `0x`-prefixed (or bare) 40-character hex into mirror bytes.
pub fn parse_mirror(text: &str) -> Result<MirrorAddress, CodecError> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    if digits.len() != 40 {
        return Err(CodecError::InvalidHex(text.to_string()));
    }

    let bytes = hex::decode(digits).map_err(|_| CodecError::InvalidHex(text.to_string()))?;
    let mut address = [0u8; 20];
    address.copy_from_slice(&bytes);
    Ok(address)
}

/// Checksum-format mirror bytes as `0x`-prefixed text.
pub fn checksum_mirror(address: &MirrorAddress) -> String {
    let lower = hex::encode(address);
    let hash = Keccak256::digest(lower.as_bytes());

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if nibble > 7 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Checksum-format a textual mirror address.
pub fn to_checksum_address(text: &str) -> Result<String, CodecError> {
    Ok(checksum_mirror(&parse_mirror(text)?))
}

/// Lower-case a textual mirror address, keeping a `0x` prefix.
pub fn lowercase_mirror(text: &str) -> Result<String, CodecError> {
    Ok(format!("0x{}", hex::encode(parse_mirror(text)?)))
}
