//! # Domain Errors
//!
//! Error types for the Address Codec. Every variant is an invalid-argument
//! condition: malformed input is never retried.

use thiserror::Error;

/// Mirror address type (20-byte).
pub type MirrorAddress = [u8; 20];

/// Native account key type (32-byte).
pub type NativeKey = [u8; 32];

/// Address codec error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Network prefix outside 0..=16383.
    #[error("Invalid network prefix: {0} (allowed 0..=16383)")]
    InvalidPrefix(u32),

    /// Network prefix reserved by the address format (46, 47).
    #[error("Reserved network prefix: {0}")]
    ReservedPrefix(u16),

    /// Raw key length not in {1, 2, 4, 8, 32, 33}.
    #[error("Invalid key length: {0} bytes")]
    InvalidKeyLength(usize),

    /// Mirror address is not 40 hex characters.
    #[error("Invalid hex address: {0}")]
    InvalidHex(String),

    /// Native text is not valid base-58.
    #[error("Invalid base58 address: {0}")]
    InvalidBase58(String),

    /// Native text checksum does not match its payload.
    #[error("Invalid address checksum")]
    InvalidChecksum,

    /// Mirror address does not carry the expected synthetic tag.
    #[error("Address {address} is not a {expected} address")]
    ForeignTag {
        /// Offending address.
        address: String,
        /// Expected tag kind.
        expected: &'static str,
    },
}

impl CodecError {
    /// Every codec error is an invalid-argument error.
    pub fn is_invalid_argument(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_prefix_error() {
        let err = CodecError::InvalidPrefix(20_000);
        assert!(err.to_string().contains("20000"));
    }

    #[test]
    fn test_foreign_tag_error() {
        let err = CodecError::ForeignTag {
            address: "0x00".to_string(),
            expected: "token",
        };
        assert!(err.to_string().contains("token"));
        assert!(err.is_invalid_argument());
    }
}
