//! # Domain Value Objects
//!
//! Immutable value types for the Address Codec.

use super::errors::CodecError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity space an account belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentitySpace {
    /// Checksummed base-58 text account of the chain itself.
    Native,
    /// Ethereum-style 20-byte account.
    Mirror,
}

impl fmt::Display for IdentitySpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentitySpace::Native => write!(f, "Substrate"),
            IdentitySpace::Mirror => write!(f, "Ethereum"),
        }
    }
}

/// Network prefix selecting the native text encoding variant.
///
/// Valid range is 0..=16383 with 46 and 47 reserved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct NetworkPrefix(u16);

impl NetworkPrefix {
    /// Generic (unnormalized) prefix.
    pub const GENERIC: NetworkPrefix = NetworkPrefix(42);

    /// Largest encodable prefix.
    pub const MAX: u16 = 16_383;

    /// Create a validated prefix.
    pub fn new(value: u16) -> Result<Self, CodecError> {
        if value > Self::MAX {
            return Err(CodecError::InvalidPrefix(u32::from(value)));
        }
        if value == 46 || value == 47 {
            return Err(CodecError::ReservedPrefix(value));
        }
        Ok(Self(value))
    }

    /// Raw prefix value.
    pub fn value(&self) -> u16 {
        self.0
    }

    /// Prefix bytes as they appear at the start of a native address.
    ///
    /// One byte below 64, otherwise the two-byte packed form.
    pub fn to_bytes(&self) -> Vec<u8> {
        let ident = self.0;
        if ident < 64 {
            vec![ident as u8]
        } else {
            let first = (((ident & 0b0000_0000_1111_1100) as u8) >> 2) | 0b0100_0000;
            let second = ((ident >> 8) as u8) | (((ident & 0b0000_0000_0000_0011) as u8) << 6);
            vec![first, second]
        }
    }

    /// Parse prefix bytes from the head of a decoded address.
    ///
    /// Returns the prefix and the number of bytes it occupied.
    pub fn from_bytes(data: &[u8]) -> Result<(Self, usize), CodecError> {
        match data {
            [first, ..] if *first < 64 => Ok((Self::new(u16::from(*first))?, 1)),
            [first, second, ..] if *first < 128 => {
                let lower = (first << 2) | (second >> 6);
                let upper = second & 0b0011_1111;
                let ident = u16::from(lower) | (u16::from(upper) << 8);
                // Values below 64 have a one-byte encoding only
                if ident < 64 {
                    return Err(CodecError::InvalidPrefix(u32::from(ident)));
                }
                Ok((Self::new(ident)?, 2))
            }
            [first, ..] => Err(CodecError::InvalidPrefix(u32::from(*first))),
            [] => Err(CodecError::InvalidBase58("empty address".to_string())),
        }
    }
}

impl Default for NetworkPrefix {
    fn default() -> Self {
        Self::GENERIC
    }
}

impl TryFrom<u16> for NetworkPrefix {
    type Error = CodecError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NetworkPrefix> for u16 {
    fn from(prefix: NetworkPrefix) -> Self {
        prefix.0
    }
}

impl fmt::Display for NetworkPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
