//! # Synthetic Owner Addresses
//!
//! Collections and tokens are addressable as mirror accounts so that a token
//! can own another token. Layouts (big-endian ids):
//!
//! ```text
//! token:      f8238ccfff8ed887463fd5e0 ++ collection_id(4) ++ token_id(4)
//! collection: 17c4e6453cc49aaaaeaca894e6d9683e ++ collection_id(4)
//! ```

use super::checksum::{checksum_mirror, parse_mirror};
use crate::domain::{CodecError, MirrorAddress};

/// Tag leading every token address.
pub const TOKEN_ADDRESS_TAG: [u8; 12] = [
    0xf8, 0x23, 0x8c, 0xcf, 0xff, 0x8e, 0xd8, 0x87, 0x46, 0x3f, 0xd5, 0xe0,
];

/// Tag leading every collection address.
pub const COLLECTION_ADDRESS_TAG: [u8; 16] = [
    0x17, 0xc4, 0xe6, 0x45, 0x3c, 0xc4, 0x9a, 0xaa, 0xae, 0xac, 0xa8, 0x94, 0xe6, 0xd9, 0x68,
    0x3e,
];

/// Raw mirror bytes addressing a token.
pub fn token_address_bytes(collection_id: u32, token_id: u32) -> MirrorAddress {
    let mut address = [0u8; 20];
    address[..12].copy_from_slice(&TOKEN_ADDRESS_TAG);
    address[12..16].copy_from_slice(&collection_id.to_be_bytes());
    address[16..].copy_from_slice(&token_id.to_be_bytes());
    address
}

/// Checksummed mirror address of a token.
pub fn token_id_to_address(collection_id: u32, token_id: u32) -> String {
    checksum_mirror(&token_address_bytes(collection_id, token_id))
}

/// Recover `(collection_id, token_id)` from a token address.
pub fn token_id_from_address(text: &str) -> Result<(u32, u32), CodecError> {
    let address = parse_mirror(text)?;
    if address[..12] != TOKEN_ADDRESS_TAG {
        return Err(CodecError::ForeignTag {
            address: text.to_string(),
            expected: "token",
        });
    }
    Ok((be_u32(&address[12..16]), be_u32(&address[16..])))
}

/// Checksummed mirror address of a collection.
pub fn collection_id_to_address(collection_id: u32) -> String {
    let mut address = [0u8; 20];
    address[..16].copy_from_slice(&COLLECTION_ADDRESS_TAG);
    address[16..].copy_from_slice(&collection_id.to_be_bytes());
    checksum_mirror(&address)
}

/// Recover the collection id from a collection address.
pub fn collection_id_from_address(text: &str) -> Result<u32, CodecError> {
    let address = parse_mirror(text)?;
    if address[..16] != COLLECTION_ADDRESS_TAG {
        return Err(CodecError::ForeignTag {
            address: text.to_string(),
            expected: "collection",
        });
    }
    Ok(be_u32(&address[16..]))
}

fn be_u32(bytes: &[u8]) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(bytes);
    u32::from_be_bytes(buf)
}
