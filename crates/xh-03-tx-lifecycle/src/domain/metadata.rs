//! # Node Metadata
//!
//! The slice of node metadata this client needs: which calls exist and how
//! module errors map to names.

use super::call::CallKind;
use serde::{Deserialize, Serialize};

/// One callable entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallMeta {
    /// Call surface.
    pub kind: CallKind,
    /// Pallet name.
    pub pallet: String,
    /// Method name.
    pub method: String,
    /// `(pallet index, call index)`.
    pub index: (u8, u8),
}

/// One module error entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMeta {
    /// Pallet index.
    pub pallet_index: u8,
    /// Error index within the pallet.
    pub error_index: u8,
    /// Pallet name.
    pub section: String,
    /// Error name.
    pub name: String,
}

/// Node metadata snapshot taken at connection time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeMetadata {
    /// Call surface.
    #[serde(default)]
    pub calls: Vec<CallMeta>,
    /// Module errors.
    #[serde(default)]
    pub errors: Vec<ErrorMeta>,
}

impl NodeMetadata {
    /// Register a call.
    pub fn with_call(mut self, kind: CallKind, pallet: &str, method: &str, index: (u8, u8)) -> Self {
        self.calls.push(CallMeta {
            kind,
            pallet: pallet.to_string(),
            method: method.to_string(),
            index,
        });
        self
    }

    /// Register a module error.
    pub fn with_error(mut self, pallet_index: u8, error_index: u8, section: &str, name: &str) -> Self {
        self.errors.push(ErrorMeta {
            pallet_index,
            error_index,
            section: section.to_string(),
            name: name.to_string(),
        });
        self
    }

    /// Module error by `(pallet index, error bytes)`.
    pub fn find_meta_error(&self, pallet_index: u8, error: [u8; 4]) -> Option<&ErrorMeta> {
        self.errors
            .iter()
            .find(|e| e.pallet_index == pallet_index && e.error_index == error[0])
    }
}
