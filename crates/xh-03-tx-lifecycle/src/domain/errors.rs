//! # Domain Errors
//!
//! Error types for the Transaction Lifecycle. Nothing here is retried
//! implicitly; retrying a state-changing call is the caller's decision.

use super::call::CallKind;
use super::result::{FailureDetail, TransactionResult};
use thiserror::Error;
use xh_01_address_codec::CodecError;

/// Transaction lifecycle error types.
#[derive(Debug, Error, Clone)]
pub enum HelperError {
    /// Malformed address, prefix or hex.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] CodecError),

    /// Call does not resolve against the node's call table.
    #[error("Call not found: {kind}.{pallet}.{method}")]
    CallNotFound {
        /// Call surface.
        kind: CallKind,
        /// Pallet name.
        pallet: String,
        /// Method name.
        method: String,
    },

    /// Included and finalized but failed on chain.
    #[error("Chain dispatch failure: {detail}")]
    ChainDispatchFailure {
        /// Extracted failure detail.
        detail: FailureDetail,
        /// Full result.
        result: Box<TransactionResult>,
    },

    /// Submission or subscription failed before any status was observed.
    #[error("Connection failure: {0}")]
    ConnectionFailure(String),

    /// Business-level failure event after the chain verdict.
    #[error("{call} emitted {method}")]
    DomainSignal {
        /// Event method (`ExecutedFailed`, `CreatedFailed`).
        method: String,
        /// Dotted call name.
        call: String,
        /// Full result.
        result: Box<TransactionResult>,
    },

    /// Configuration rejected by validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl HelperError {
    /// No error is retried automatically.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Result attached to the error, if any.
    pub fn result(&self) -> Option<&TransactionResult> {
        match self {
            Self::ChainDispatchFailure { result, .. } | Self::DomainSignal { result, .. } => {
                Some(result)
            }
            _ => None,
        }
    }
}
