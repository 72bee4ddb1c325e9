//! # Transaction Results

use super::status::{TransactionOutcome, TransactionStatus};
use primitive_types::H256;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use xh_02_event_decoder::{find_event, DecodedEvent};

/// Why a transaction failed. Exactly one is attached to a failed result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum FailureDetail {
    /// Module error resolved through metadata.
    Module {
        /// Pallet name.
        section: String,
        /// Error name.
        name: String,
    },
    /// Token/balance-class error.
    Token(String),
    /// Any other dispatch error, as rendered.
    Dispatch(Value),
    /// No dispatch error was available; only the status is known.
    BareStatus(TransactionStatus),
}

impl fmt::Display for FailureDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Module { section, name } => write!(f, "{section}.{name}"),
            Self::Token(label) => write!(f, "Token: {label}"),
            Self::Dispatch(value) => write!(f, "{value}"),
            Self::BareStatus(status) => write!(f, "{status}"),
        }
    }
}

/// Result of one lifecycle run. Owns its decoded events.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TransactionResult {
    /// Verdict.
    pub outcome: TransactionOutcome,
    /// Status the verdict was reached on.
    pub status: TransactionStatus,
    /// Decoded events in emission order.
    pub events: Vec<DecodedEvent>,
    /// Block hash, when finalized.
    pub block_hash: Option<H256>,
    /// Failure detail, when failed.
    pub failure: Option<FailureDetail>,
}

impl TransactionResult {
    /// Verdict is `Success`.
    pub fn is_success(&self) -> bool {
        self.outcome == TransactionOutcome::Success
    }

    /// First event matching `section.method`.
    pub fn find_event(&self, section: &str, method: &str) -> Option<&DecodedEvent> {
        find_event(&self.events, section, method)
    }

    /// Module error label (`section.name`), if the failure was one.
    pub fn module_error(&self) -> Option<String> {
        match &self.failure {
            Some(detail @ FailureDetail::Module { .. }) => Some(detail.to_string()),
            _ => None,
        }
    }
}
