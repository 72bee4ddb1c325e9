//! # XH-03 Transaction Lifecycle
//!
//! Drives a signed call from submission to a terminal `Success`/`Fail`
//! verdict and records every call a session makes.
//!
//! **Component ID:** 03
//! **Architecture:** Hexagonal (Ports & Adapters)
//!
//! ## Purpose
//!
//! - Resolve typed call descriptors against the node's call table
//! - Sign with the next nonce, submit, and watch the status stream
//! - Classify statuses: `Success` only on finalization with `ExtrinsicSuccess`
//! - Extract module, token or generic failure detail
//! - Surface `ExecutedFailed`/`CreatedFailed` as domain failures
//!
//! ## Verdict Rules
//!
//! | Status | Events | Verdict |
//! |--------|--------|---------|
//! | Ready / Broadcast / Future / Retracted | any | keep watching |
//! | InBlock / Finalized | `ExtrinsicFailed` | Fail |
//! | InBlock | `ExtrinsicSuccess` | keep watching |
//! | Finalized | `ExtrinsicSuccess` | Success |
//! | InBlock / Finalized | neither | Fail |
//! | anything else | any | Fail |
//!
//! ## Module Structure
//!
//! ```text
//! xh-03-tx-lifecycle/
//! ├── domain/          # statuses, calls, results, metadata, config, errors
//! ├── algorithms/      # classification, failure extraction
//! ├── ports/           # TransactionApi (inbound), NodeApi/Signer (outbound)
//! ├── adapters/        # CallTable, ScriptedNode, Ed25519Signer
//! └── service/         # TransactionLifecycle, HelperSession, CallLog, NonceCache
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{CallTable, Ed25519Signer, Script, ScriptStep, ScriptedNode};
pub use algorithms::{classify_status, extract_failure_detail};
pub use domain::{
    CallDescriptor, CallKind, DispatchError, FailureDetail, HelperConfig, HelperError,
    LifecycleState, NodeMetadata, ResolvedCall, SignedExtrinsic, StatusUpdate, SubmitOptions,
    TransactionOutcome, TransactionResult, TransactionStatus,
};
pub use ports::{NodeApi, Signer, StatusSubscription, TransactionApi};
pub use service::{
    CallLog, CallRecord, HelperSession, NonceCache, StatusWatcher, TransactionLifecycle,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
