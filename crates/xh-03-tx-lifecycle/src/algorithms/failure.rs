//! # Failure Detail Extraction
//!
//! In order: a module error named by metadata, a token error, any other
//! dispatch error. Without a dispatch error only the status is reported.

use crate::domain::{DispatchError, FailureDetail, NodeMetadata, StatusUpdate, TransactionStatus};
use serde_json::json;
use tracing::error;

/// Extract the failure detail for a failed status.
pub fn extract_failure_detail(
    status: &TransactionStatus,
    dispatch_error: Option<&DispatchError>,
    metadata: &NodeMetadata,
) -> FailureDetail {
    match dispatch_error {
        Some(DispatchError::Module { index, error }) => match metadata.find_meta_error(*index, *error) {
            Some(meta) => FailureDetail::Module {
                section: meta.section.clone(),
                name: meta.name.clone(),
            },
            None => FailureDetail::Dispatch(json!({
                "Module": { "index": index, "error": format!("0x{}", hex::encode(error)) }
            })),
        },
        Some(DispatchError::Token(label)) => FailureDetail::Token(label.clone()),
        Some(DispatchError::Other(value)) => FailureDetail::Dispatch(value.clone()),
        None => FailureDetail::BareStatus(status.clone()),
    }
}

/// Failure detail for a whole status update.
///
/// Logs the raw payload at error level when no dispatch error is present.
pub fn failure_for_update(update: &StatusUpdate, metadata: &NodeMetadata) -> FailureDetail {
    let dispatch_error = update.dispatch_error();
    if dispatch_error.is_none() {
        let payload = serde_json::to_string(update).unwrap_or_default();
        error!(status = %update.status, %payload, "Transaction failed without a dispatch error");
    }
    extract_failure_detail(&update.status, dispatch_error.as_ref(), metadata)
}
