//! # Call Descriptors
//!
//! Typed replacements for dotted call paths. A descriptor names a call; a
//! resolved call is a descriptor checked against the node's call table.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Call surface a descriptor addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallKind {
    /// Signed, state-changing extrinsic.
    Tx,
    /// Storage query.
    Query,
    /// Node RPC method.
    Rpc,
}

impl fmt::Display for CallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tx => write!(f, "tx"),
            Self::Query => write!(f, "query"),
            Self::Rpc => write!(f, "rpc"),
        }
    }
}

/// Fully qualified call with positional parameters.
///
/// Parameter shape is validated by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallDescriptor {
    /// Call surface.
    pub kind: CallKind,
    /// Pallet (or RPC namespace).
    pub pallet: String,
    /// Method within the pallet.
    pub method: String,
    /// Positional parameters.
    pub params: Vec<Value>,
}

impl CallDescriptor {
    /// Extrinsic call.
    pub fn tx(pallet: impl Into<String>, method: impl Into<String>, params: Vec<Value>) -> Self {
        Self::new(CallKind::Tx, pallet, method, params)
    }

    /// Storage query.
    pub fn query(pallet: impl Into<String>, method: impl Into<String>, params: Vec<Value>) -> Self {
        Self::new(CallKind::Query, pallet, method, params)
    }

    /// RPC call.
    pub fn rpc(namespace: impl Into<String>, method: impl Into<String>, params: Vec<Value>) -> Self {
        Self::new(CallKind::Rpc, namespace, method, params)
    }

    fn new(
        kind: CallKind,
        pallet: impl Into<String>,
        method: impl Into<String>,
        params: Vec<Value>,
    ) -> Self {
        Self {
            kind,
            pallet: pallet.into(),
            method: method.into(),
            params,
        }
    }
}

impl fmt::Display for CallDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.kind, self.pallet, self.method)
    }
}

/// Descriptor resolved against the call table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCall {
    /// The descriptor.
    pub descriptor: CallDescriptor,
    /// `(pallet index, call index)` from node metadata.
    pub call_index: (u8, u8),
}

impl ResolvedCall {
    /// Dotted name, e.g. `tx.balances.transfer`.
    pub fn name(&self) -> String {
        self.descriptor.to_string()
    }
}

/// Signed extrinsic ready for submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedExtrinsic {
    /// Resolved call.
    pub call: ResolvedCall,
    /// Signer's native address.
    pub signer: String,
    /// Account nonce used.
    pub nonce: u64,
    /// Signature over [`SignedExtrinsic::signing_payload`].
    pub signature: Vec<u8>,
}

impl SignedExtrinsic {
    /// Bytes the signer signs: call index, parameters, nonce.
    pub fn signing_payload(call: &ResolvedCall, nonce: u64) -> Vec<u8> {
        let mut payload = vec![call.call_index.0, call.call_index.1];
        // Value serialization does not fail
        payload.extend(serde_json::to_vec(&call.descriptor.params).unwrap_or_default());
        payload.extend_from_slice(&nonce.to_le_bytes());
        payload
    }

    /// Hex rendering of the signature.
    pub fn signature_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.signature))
    }
}

/// Per-call submission options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitOptions {
    /// Explicit nonce; `None` queries the chain and uses the session cache.
    pub nonce: Option<u64>,
    /// Raise unless the verdict is `Success`; `None` uses the session default.
    pub must_succeed: Option<bool>,
}

impl SubmitOptions {
    /// Use an explicit nonce.
    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }

    /// Override the must-succeed default.
    pub fn must_succeed(mut self, must_succeed: bool) -> Self {
        self.must_succeed = Some(must_succeed);
        self
    }
}
