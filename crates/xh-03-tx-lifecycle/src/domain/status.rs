//! # Status Snapshots
//!
//! What the node reports for a submitted extrinsic, and the verdicts the
//! lifecycle derives from it.

use primitive_types::H256;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use xh_02_event_decoder::{EventRecord, RawValue};

/// Raw status of a submitted extrinsic as reported by the node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// Accepted into the pool.
    Ready,
    /// Gossiped to peers.
    Broadcast,
    /// Waiting on an earlier nonce.
    Future,
    /// Its block was retracted; it is back in the pool.
    Retracted(H256),
    /// Included in a block.
    InBlock(H256),
    /// Included in a finalized block.
    Finalized(H256),
    /// Replaced by another extrinsic with the same nonce.
    Usurped(H256),
    /// Dropped from the pool.
    Dropped,
    /// Rejected as invalid.
    Invalid,
    /// Finality was not reached in time.
    FinalityTimeout(H256),
    /// Stream ended without a terminal status.
    StreamClosed,
    /// Stream errored after at least one status.
    StreamError(String),
}

impl TransactionStatus {
    /// Not yet included: ready, broadcast, future, retracted.
    pub fn is_not_ready(&self) -> bool {
        matches!(
            self,
            Self::Ready | Self::Broadcast | Self::Future | Self::Retracted(_)
        )
    }

    /// Included in a block or finalized.
    pub fn is_included(&self) -> bool {
        matches!(self, Self::InBlock(_) | Self::Finalized(_))
    }

    /// Included in a finalized block.
    pub fn is_finalized(&self) -> bool {
        matches!(self, Self::Finalized(_))
    }

    /// Block hash carried by the status, if any.
    pub fn block_hash(&self) -> Option<H256> {
        match self {
            Self::Retracted(hash)
            | Self::InBlock(hash)
            | Self::Finalized(hash)
            | Self::Usurped(hash)
            | Self::FinalityTimeout(hash) => Some(*hash),
            _ => None,
        }
    }

    /// Variant name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::Broadcast => "Broadcast",
            Self::Future => "Future",
            Self::Retracted(_) => "Retracted",
            Self::InBlock(_) => "InBlock",
            Self::Finalized(_) => "Finalized",
            Self::Usurped(_) => "Usurped",
            Self::Dropped => "Dropped",
            Self::Invalid => "Invalid",
            Self::FinalityTimeout(_) => "FinalityTimeout",
            Self::StreamClosed => "StreamClosed",
            Self::StreamError(_) => "StreamError",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StreamError(message) => write!(f, "StreamError({message})"),
            other => match other.block_hash() {
                Some(hash) => write!(f, "{}({:?})", other.name(), hash),
                None => f.write_str(other.name()),
            },
        }
    }
}

/// Classified outcome of one status snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionOutcome {
    /// No terminal verdict yet.
    NotReady,
    /// Included, `ExtrinsicSuccess` seen, no `ExtrinsicFailed`.
    Success,
    /// `ExtrinsicFailed` seen, no success signal, or the stream ended.
    Fail,
}

impl fmt::Display for TransactionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady => write!(f, "NotReady"),
            Self::Success => write!(f, "Success"),
            Self::Fail => write!(f, "Fail"),
        }
    }
}

/// Lifecycle state machine.
///
/// `Submitting -> Watching -> {Success, Fail}`. `Watching` re-enters itself
/// on every update that does not resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    /// Resolving nonce, signing, submitting.
    Submitting,
    /// Consuming status updates.
    Watching,
    /// Terminal success.
    Success,
    /// Terminal failure.
    Fail,
}

impl LifecycleState {
    /// Terminal states.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Fail)
    }
}

/// Dispatch error reported for a failed extrinsic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchError {
    /// Error raised by a specific pallet.
    Module {
        /// Pallet index.
        index: u8,
        /// Pallet-local error bytes; the first byte is the error index.
        error: [u8; 4],
    },
    /// Token/balance-class error.
    Token(String),
    /// Any other shape, as rendered by the node.
    Other(Value),
}

impl DispatchError {
    /// Read a dispatch error from the first field of an `ExtrinsicFailed`
    /// event.
    pub fn from_raw(raw: &RawValue) -> Self {
        if let RawValue::Variant { name, value } = raw {
            match name.as_str() {
                "Module" => {
                    if let Some(module) = module_error(value) {
                        return module;
                    }
                }
                "Token" => return Self::Token(variant_label(value)),
                _ => {}
            }
        }
        Self::Other(raw.to_human())
    }
}

fn module_error(value: &RawValue) -> Option<DispatchError> {
    let fields = value.named_fields()?;
    let field = |name: &str| fields.iter().find(|(n, _)| n == name).map(|(_, v)| v);

    let index = match field("index")? {
        RawValue::Uint(n) => u8::try_from(*n).ok()?,
        _ => return None,
    };
    let mut error = [0u8; 4];
    match field("error")? {
        RawValue::Uint(n) => error[0] = u8::try_from(*n).ok()?,
        RawValue::Bytes(bytes) if bytes.len() <= 4 => error[..bytes.len()].copy_from_slice(bytes),
        RawValue::Text(text) => {
            let bytes = hex::decode(text.trim_start_matches("0x")).ok()?;
            if bytes.len() > 4 {
                return None;
            }
            error[..bytes.len()].copy_from_slice(&bytes);
        }
        _ => return None,
    }
    Some(DispatchError::Module { index, error })
}

fn variant_label(value: &RawValue) -> String {
    match value {
        RawValue::Variant { name, .. } => name.clone(),
        RawValue::Text(text) => text.clone(),
        other => other.to_human().to_string(),
    }
}

/// One status snapshot with the events emitted so far.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    /// Raw status.
    pub status: TransactionStatus,
    /// Raw event records for the extrinsic.
    #[serde(default)]
    pub events: Vec<EventRecord>,
    /// Dispatch error, when the node reports one alongside the status.
    #[serde(default)]
    pub dispatch_error: Option<DispatchError>,
}

impl StatusUpdate {
    /// Snapshot without events.
    pub fn new(status: TransactionStatus) -> Self {
        Self {
            status,
            events: Vec::new(),
            dispatch_error: None,
        }
    }

    /// Attach events.
    pub fn with_events(mut self, events: Vec<EventRecord>) -> Self {
        self.events = events;
        self
    }

    /// Attach a dispatch error.
    pub fn with_dispatch_error(mut self, error: DispatchError) -> Self {
        self.dispatch_error = Some(error);
        self
    }

    /// Any event with `method`.
    pub fn has_event(&self, method: &str) -> bool {
        self.events.iter().any(|record| record.event.method == method)
    }

    /// Reported dispatch error, or the one carried by `ExtrinsicFailed`.
    pub fn dispatch_error(&self) -> Option<DispatchError> {
        self.dispatch_error.clone().or_else(|| {
            self.events
                .iter()
                .find(|record| record.event.method == "ExtrinsicFailed")
                .and_then(|record| record.event.data.first())
                .map(DispatchError::from_raw)
        })
    }
}
