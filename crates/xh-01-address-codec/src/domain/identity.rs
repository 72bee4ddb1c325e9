//! # Cross Identity
//!
//! An account given in either identity space. Conversion between spaces is
//! always an explicit call; nothing here converts implicitly.

use super::errors::CodecError;
use super::value_objects::{IdentitySpace, NetworkPrefix};
use crate::algorithms::{
    checksum_mirror, decode_account, decode_native, lowercase_mirror, mirror_to_native,
    native_to_mirror, normalize_native, parse_mirror,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account in the native or mirror identity space.
///
/// Serializes the way the node renders cross accounts:
/// `{"Substrate": "5..."}` or `{"Ethereum": "0x..."}`.
///
/// Derived equality is structural. Two values name the same owner only after
/// normalization; use [`CrossIdentity::same_owner`] for that comparison.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrossIdentity {
    /// Native base-58 text address.
    #[serde(rename = "Substrate")]
    Native(String),
    /// Mirror `0x` hex address.
    #[serde(rename = "Ethereum")]
    Mirror(String),
}

impl CrossIdentity {
    /// Validated native identity.
    pub fn native(text: impl Into<String>) -> Result<Self, CodecError> {
        let text = text.into();
        decode_native(&text)?;
        Ok(Self::Native(text))
    }

    /// Validated mirror identity.
    pub fn mirror(text: impl Into<String>) -> Result<Self, CodecError> {
        let text = text.into();
        parse_mirror(&text)?;
        Ok(Self::Mirror(text))
    }

    /// Mirror identity from raw bytes, checksum-formatted.
    pub fn from_mirror_bytes(address: &[u8; 20]) -> Self {
        Self::Mirror(checksum_mirror(address))
    }

    /// Identity space of this value.
    pub fn space(&self) -> IdentitySpace {
        match self {
            Self::Native(_) => IdentitySpace::Native,
            Self::Mirror(_) => IdentitySpace::Mirror,
        }
    }

    /// Address text as given.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Native(text) | Self::Mirror(text) => text,
        }
    }

    /// Canonical form: native re-encoded under `prefix`, mirror lower-cased.
    ///
    /// Idempotent.
    pub fn normalize(&self, prefix: NetworkPrefix) -> Result<Self, CodecError> {
        match self {
            Self::Native(text) => Ok(Self::Native(normalize_native(text, prefix)?)),
            Self::Mirror(text) => Ok(Self::Mirror(lowercase_mirror(text)?)),
        }
    }

    /// Mirror view of this account (checksummed).
    pub fn to_mirror(&self) -> Result<Self, CodecError> {
        match self {
            Self::Mirror(_) => Ok(self.clone()),
            Self::Native(text) => {
                let (key, _) = decode_account(text)?;
                Ok(Self::from_mirror_bytes(&native_to_mirror(&key)))
            }
        }
    }

    /// Native view of this account.
    ///
    /// A mirror yields its derived native account, which is not the native
    /// account the mirror may have been truncated from.
    pub fn to_native(&self, prefix: Option<NetworkPrefix>) -> Result<Self, CodecError> {
        match self {
            Self::Native(_) => match prefix {
                Some(prefix) => self.normalize(prefix),
                None => Ok(self.clone()),
            },
            Self::Mirror(text) => Ok(Self::Native(mirror_to_native(&parse_mirror(text)?, prefix)?)),
        }
    }

    /// Owner equality.
    ///
    /// Same space: compare normalized forms. Different spaces: compare in the
    /// mirror space, the only direction that is a pure function of the key.
    pub fn same_owner(&self, other: &Self, prefix: NetworkPrefix) -> Result<bool, CodecError> {
        if self.space() == other.space() {
            return Ok(self.normalize(prefix)? == other.normalize(prefix)?);
        }
        let left = self.to_mirror()?.normalize(prefix)?;
        let right = other.to_mirror()?.normalize(prefix)?;
        Ok(left == right)
    }

    /// Parse an identity rendered inside an event payload.
    ///
    /// Accepts `{"Substrate": ..}` / `{"Ethereum": ..}` with any key case.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        let object = value.as_object()?;
        if object.len() != 1 {
            return None;
        }
        let (key, inner) = object.iter().next()?;
        let text = inner.as_str()?;
        match key.to_ascii_lowercase().as_str() {
            "substrate" => Self::native(text).ok(),
            "ethereum" => Self::mirror(text).ok(),
            _ => None,
        }
    }
}

impl fmt::Display for CrossIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.space(), self.as_str())
    }
}
