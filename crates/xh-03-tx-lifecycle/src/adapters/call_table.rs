//! # Call Table
//!
//! Call surface built once from node metadata. Unknown names resolve to
//! `CallNotFound`.

use crate::domain::{CallDescriptor, CallKind, HelperError, NodeMetadata, ResolvedCall};
use std::collections::HashMap;

/// Resolved call surface of one node.
#[derive(Clone, Debug, Default)]
pub struct CallTable {
    entries: HashMap<(CallKind, String, String), (u8, u8)>,
}

impl CallTable {
    /// Build from metadata.
    pub fn from_metadata(metadata: &NodeMetadata) -> Self {
        let entries = metadata
            .calls
            .iter()
            .map(|call| {
                (
                    (call.kind, call.pallet.clone(), call.method.clone()),
                    call.index,
                )
            })
            .collect();
        Self { entries }
    }

    /// Resolve a descriptor.
    pub fn resolve(&self, descriptor: &CallDescriptor) -> Result<ResolvedCall, HelperError> {
        let key = (
            descriptor.kind,
            descriptor.pallet.clone(),
            descriptor.method.clone(),
        );
        match self.entries.get(&key) {
            Some(index) => Ok(ResolvedCall {
                descriptor: descriptor.clone(),
                call_index: *index,
            }),
            None => Err(HelperError::CallNotFound {
                kind: descriptor.kind,
                pallet: descriptor.pallet.clone(),
                method: descriptor.method.clone(),
            }),
        }
    }

    /// Whether a call exists.
    pub fn contains(&self, kind: CallKind, pallet: &str, method: &str) -> bool {
        self.entries
            .contains_key(&(kind, pallet.to_string(), method.to_string()))
    }

    /// Number of calls.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Empty table.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
