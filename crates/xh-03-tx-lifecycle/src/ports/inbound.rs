//! # Inbound Ports
//!
//! API exposed to per-pallet wrappers.

use crate::domain::{CallDescriptor, HelperError, SubmitOptions, TransactionResult};
use crate::ports::outbound::Signer;
use crate::service::CallLog;
use async_trait::async_trait;
use serde_json::Value;

/// Transaction API - inbound port.
#[async_trait]
pub trait TransactionApi: Send + Sync {
    /// Sign, submit and watch one extrinsic, then record it.
    ///
    /// Fails with `DomainSignal` when an `ExecutedFailed`/`CreatedFailed`
    /// event is present, and with `ChainDispatchFailure` when success was
    /// required but not reached.
    async fn execute_extrinsic(
        &self,
        signer: &dyn Signer,
        call: CallDescriptor,
        options: SubmitOptions,
    ) -> Result<TransactionResult, HelperError>;

    /// Run a query or RPC call and record it.
    async fn call_query(&self, call: CallDescriptor) -> Result<Value, HelperError>;

    /// Session call log.
    fn call_log(&self) -> &CallLog;
}
