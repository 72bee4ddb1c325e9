//! # Terminal Classification
//!
//! - not yet included (ready, broadcast, future, retracted): `NotReady`
//! - included or finalized: `ExtrinsicFailed` wins, then `ExtrinsicSuccess`,
//!   otherwise `Fail`
//! - anything else (dropped, invalid, usurped, timeout, stream end): `Fail`
//!
//! A missing success event is never read as success.

use crate::domain::{TransactionOutcome, TransactionStatus};
use xh_02_event_decoder::EventRecord;

/// Event method marking a failed dispatch.
pub const EXTRINSIC_FAILED: &str = "ExtrinsicFailed";

/// Event method marking a successful dispatch.
pub const EXTRINSIC_SUCCESS: &str = "ExtrinsicSuccess";

/// Classify one status snapshot.
pub fn classify_status(status: &TransactionStatus, events: &[EventRecord]) -> TransactionOutcome {
    if status.is_not_ready() {
        return TransactionOutcome::NotReady;
    }
    if !status.is_included() {
        return TransactionOutcome::Fail;
    }

    let has = |method: &str| events.iter().any(|record| record.event.method == method);
    if has(EXTRINSIC_FAILED) {
        TransactionOutcome::Fail
    } else if has(EXTRINSIC_SUCCESS) {
        TransactionOutcome::Success
    } else {
        TransactionOutcome::Fail
    }
}
