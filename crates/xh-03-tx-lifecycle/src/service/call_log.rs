//! # Call Log
//!
//! Append-only record of every call a session made. Owned by the session
//! and handed out explicitly; clones share the same records.

use crate::domain::{CallKind, TransactionOutcome};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

/// One logged call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CallRecord {
    /// Record id.
    pub id: Uuid,
    /// When the call started.
    pub timestamp: DateTime<Utc>,
    /// Wall time in milliseconds.
    pub duration_ms: u64,
    /// Call surface as logged (`Tx` or `Rpc`).
    pub kind: CallKind,
    /// Dotted call name.
    pub call: String,
    /// Positional parameters.
    pub params: Vec<Value>,
    /// Signer address, for extrinsics.
    pub signer: Option<String>,
    /// Final status, or the error that ended the call.
    pub status: Option<String>,
    /// Verdict, for extrinsics that reached one.
    pub outcome: Option<TransactionOutcome>,
    /// Decoded events in emission order.
    pub events: Vec<Value>,
    /// Module error (`section.name`), if any.
    pub module_error: Option<String>,
}

impl CallRecord {
    /// Record for a call starting now.
    pub fn new(kind: CallKind, call: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            duration_ms: 0,
            kind,
            call: call.into(),
            params,
            signer: None,
            status: None,
            outcome: None,
            events: Vec::new(),
            module_error: None,
        }
    }
}

/// Session call log.
#[derive(Clone, Debug, Default)]
pub struct CallLog {
    records: Arc<Mutex<Vec<CallRecord>>>,
}

impl CallLog {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn append(&self, record: CallRecord) {
        self.records.lock().push(record);
    }

    /// Snapshot of all records in append order.
    pub fn records(&self) -> Vec<CallRecord> {
        self.records.lock().clone()
    }

    /// Most recent record.
    pub fn last(&self) -> Option<CallRecord> {
        self.records.lock().last().cloned()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// No records.
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Drop every record (explicit session reset).
    pub fn clear(&self) {
        self.records.lock().clear();
    }

    /// JSON array of all records.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(&*self.records.lock()).unwrap_or(Value::Null)
    }
}
