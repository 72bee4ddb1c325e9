//! # Helper Session
//!
//! Application service implementing `TransactionApi`.
//!
//! ## Architecture
//!
//! One session per node connection. The session:
//! - builds the call table from node metadata once, at connect time
//! - owns the call log and the per-signer nonce cache
//! - runs one `TransactionLifecycle` per extrinsic and layers the
//!   domain-signal and must-succeed checks on top of its verdict

use crate::adapters::CallTable;
use crate::domain::{
    CallDescriptor, CallKind, FailureDetail, HelperConfig, HelperError, NodeMetadata,
    SubmitOptions, TransactionOutcome, TransactionResult,
};
use crate::ports::{NodeApi, Signer, TransactionApi};
use crate::service::call_log::{CallLog, CallRecord};
use crate::service::lifecycle::TransactionLifecycle;
use crate::service::nonce::NonceCache;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use helper_telemetry::component_span;
use tracing::{info, warn, Instrument};
use xh_01_address_codec::NetworkPrefix;

/// Event methods that signal a business-level failure.
pub const DOMAIN_FAILURE_EVENTS: [&str; 2] = ["ExecutedFailed", "CreatedFailed"];

/// Client session over one node connection.
pub struct HelperSession<N: NodeApi> {
    node: Arc<N>,
    config: HelperConfig,
    prefix: NetworkPrefix,
    metadata: NodeMetadata,
    calls: CallTable,
    nonces: NonceCache,
    log: CallLog,
}

impl<N: NodeApi> HelperSession<N> {
    /// Open a session: validate config and build the call table.
    pub async fn connect(node: Arc<N>, config: HelperConfig) -> Result<Self, HelperError> {
        config.validate()?;
        let prefix = config.prefix()?;
        let metadata = node.metadata().await?;
        let calls = CallTable::from_metadata(&metadata);

        info!(
            node_url = %config.node_url,
            prefix = prefix.value(),
            calls = calls.len(),
            "Helper session connected"
        );

        Ok(Self {
            node,
            config,
            prefix,
            metadata,
            calls,
            nonces: NonceCache::new(),
            log: CallLog::new(),
        })
    }

    /// Session configuration.
    pub fn config(&self) -> &HelperConfig {
        &self.config
    }

    /// Network prefix addresses are normalized to.
    pub fn prefix(&self) -> NetworkPrefix {
        self.prefix
    }

    /// Metadata snapshot from connect time.
    pub fn metadata(&self) -> &NodeMetadata {
        &self.metadata
    }

    /// Resolved call surface.
    pub fn call_table(&self) -> &CallTable {
        &self.calls
    }

    /// Shared node handle.
    pub fn node(&self) -> &Arc<N> {
        &self.node
    }

    /// Per-signer nonce cache.
    pub fn nonce_cache(&self) -> &NonceCache {
        &self.nonces
    }

    fn lifecycle(&self) -> TransactionLifecycle<'_> {
        let nonces = self.config.nonce_cache.then_some(&self.nonces);
        TransactionLifecycle::new(self.node.as_ref(), &self.metadata, nonces)
            .with_capacity(self.config.status_channel_capacity)
    }

    fn record_extrinsic(
        &self,
        mut record: CallRecord,
        started: Instant,
        outcome: &Result<TransactionResult, HelperError>,
    ) {
        record.duration_ms = elapsed_ms(started);
        match outcome {
            Ok(result) => {
                record.status = Some(result.status.to_string());
                record.outcome = Some(result.outcome);
                record.events = result
                    .events
                    .iter()
                    .map(|e| serde_json::to_value(e).unwrap_or(Value::Null))
                    .collect();
                record.module_error = result.module_error();
            }
            Err(err) => record.status = Some(err.to_string()),
        }
        self.log.append(record);
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[async_trait]
impl<N: NodeApi> TransactionApi for HelperSession<N> {
    async fn execute_extrinsic(
        &self,
        signer: &dyn Signer,
        call: CallDescriptor,
        options: SubmitOptions,
    ) -> Result<TransactionResult, HelperError> {
        let started = Instant::now();
        let mut record = CallRecord::new(CallKind::Tx, call.to_string(), call.params.clone());
        record.signer = Some(signer.address().to_string());

        if call.kind != CallKind::Tx {
            return Err(HelperError::CallNotFound {
                kind: call.kind,
                pallet: call.pallet,
                method: call.method,
            });
        }
        let resolved = self.calls.resolve(&call)?;

        let span = component_span!("execute_extrinsic", component = "03", call = %call);
        let outcome = self
            .lifecycle()
            .submit(signer, resolved, options.nonce)
            .instrument(span)
            .await;
        self.record_extrinsic(record, started, &outcome);
        let result = outcome?;

        if let Some(event) = result
            .events
            .iter()
            .find(|e| DOMAIN_FAILURE_EVENTS.contains(&e.method.as_str()))
        {
            warn!(call = %call, method = %event.method, "Domain failure event");
            return Err(HelperError::DomainSignal {
                method: event.method.clone(),
                call: call.to_string(),
                result: Box::new(result),
            });
        }

        let must_succeed = options
            .must_succeed
            .unwrap_or(self.config.must_succeed_by_default);
        if must_succeed && result.outcome != TransactionOutcome::Success {
            let detail = result
                .failure
                .clone()
                .unwrap_or_else(|| FailureDetail::BareStatus(result.status.clone()));
            return Err(HelperError::ChainDispatchFailure {
                detail,
                result: Box::new(result),
            });
        }

        Ok(result)
    }

    async fn call_query(&self, call: CallDescriptor) -> Result<Value, HelperError> {
        let started = Instant::now();
        if call.kind == CallKind::Tx {
            return Err(HelperError::CallNotFound {
                kind: call.kind,
                pallet: call.pallet,
                method: call.method,
            });
        }
        let resolved = self.calls.resolve(&call)?;

        let span = component_span!("call_query", component = "03", call = %call);
        let response = self.node.query(&resolved).instrument(span).await;

        let mut record = CallRecord::new(CallKind::Rpc, call.to_string(), call.params);
        record.duration_ms = elapsed_ms(started);
        record.status = Some(match &response {
            Ok(_) => "Ok".to_string(),
            Err(err) => err.to_string(),
        });
        self.log.append(record);

        response
    }

    fn call_log(&self) -> &CallLog {
        &self.log
    }
}
