//! # Type Descriptors
//!
//! Per-field decoding hints supplied by node metadata at call time.

use serde::{Deserialize, Serialize};

/// How to decode one event field.
///
/// An absent descriptor (`None` wherever `Option<TypeDescriptor>` appears)
/// means "render generically".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeDescriptor {
    /// 16-bit integer, decoded as a machine integer.
    U16,
    /// 32-bit integer, decoded as a machine integer.
    U32,
    /// 64-bit integer, decoded as an arbitrary-precision integer.
    U64,
    /// 128-bit integer, decoded as an arbitrary-precision integer.
    U128,
    /// 256-bit integer, decoded as an arbitrary-precision integer.
    U256,
    /// Structured field; `sub[i]` describes the i-th named sub-field.
    Struct {
        /// Positional sub-field descriptors.
        sub: Vec<Option<TypeDescriptor>>,
    },
    /// Any other named type; rendered generically.
    Named(String),
}

impl TypeDescriptor {
    /// Descriptor for a metadata type name such as `u32` or `u128`.
    pub fn from_type_name(name: &str) -> Self {
        match name.trim() {
            "u16" => Self::U16,
            "u32" => Self::U32,
            "u64" => Self::U64,
            "u128" => Self::U128,
            "u256" | "U256" => Self::U256,
            other => Self::Named(other.to_string()),
        }
    }

    /// 16/32-bit widths.
    pub fn is_machine_int(&self) -> bool {
        matches!(self, Self::U16 | Self::U32)
    }

    /// 64/128/256-bit widths.
    pub fn is_big_int(&self) -> bool {
        matches!(self, Self::U64 | Self::U128 | Self::U256)
    }

    /// Bit width for integer descriptors.
    pub fn bits(&self) -> Option<u32> {
        match self {
            Self::U16 => Some(16),
            Self::U32 => Some(32),
            Self::U64 => Some(64),
            Self::U128 => Some(128),
            Self::U256 => Some(256),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_type_name() {
        assert_eq!(TypeDescriptor::from_type_name("u32"), TypeDescriptor::U32);
        assert_eq!(TypeDescriptor::from_type_name("u128"), TypeDescriptor::U128);
        assert_eq!(
            TypeDescriptor::from_type_name("AccountId32"),
            TypeDescriptor::Named("AccountId32".to_string())
        );
    }

    #[test]
    fn test_width_classes() {
        assert!(TypeDescriptor::U16.is_machine_int());
        assert!(!TypeDescriptor::U64.is_machine_int());
        assert!(TypeDescriptor::U256.is_big_int());
        assert_eq!(TypeDescriptor::U128.bits(), Some(128));
        assert_eq!(TypeDescriptor::Struct { sub: vec![] }.bits(), None);
    }
}
