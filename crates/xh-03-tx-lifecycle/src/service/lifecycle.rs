//! # Transaction Lifecycle
//!
//! Drives one signed call from submission to a terminal verdict.
//!
//! ## State Machine
//!
//! ```text
//! Submitting ──► Watching ──► Success | Fail
//!                  │  ▲
//!                  └──┘ NotReady, or Success not yet finalized
//! ```
//!
//! On a terminal verdict the status subscription is dropped before any
//! event decoding, so nothing delivered afterwards can reach the result.

use crate::algorithms::{classify_status, failure_for_update};
use crate::domain::{
    FailureDetail, HelperError, LifecycleState, NodeMetadata, ResolvedCall, SignedExtrinsic,
    StatusUpdate, TransactionOutcome, TransactionResult, TransactionStatus,
    DEFAULT_STATUS_CAPACITY,
};
use crate::ports::{NodeApi, Signer};
use crate::service::nonce::NonceCache;
use tracing::{debug, info, warn};
use xh_02_event_decoder::decode_events;

/// What to do after one status update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observation {
    /// Stay in `Watching`.
    Continue,
    /// Leave `Watching` with this verdict.
    Resolve(TransactionOutcome),
}

/// Watching-state bookkeeping for one subscription.
#[derive(Debug)]
pub struct StatusWatcher {
    state: LifecycleState,
    seen: usize,
}

impl Default for StatusWatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusWatcher {
    /// Watcher in `Watching`.
    pub fn new() -> Self {
        Self {
            state: LifecycleState::Watching,
            seen: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Updates observed so far.
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Feed one update.
    ///
    /// `Success` resolves only on a finalized status. Once terminal, further
    /// updates are ignored.
    pub fn observe(&mut self, update: &StatusUpdate) -> Observation {
        if self.state.is_terminal() {
            return Observation::Continue;
        }
        self.seen += 1;

        match classify_status(&update.status, &update.events) {
            TransactionOutcome::NotReady => Observation::Continue,
            TransactionOutcome::Success if !update.status.is_finalized() => Observation::Continue,
            TransactionOutcome::Success => {
                self.state = LifecycleState::Success;
                Observation::Resolve(TransactionOutcome::Success)
            }
            TransactionOutcome::Fail => {
                self.state = LifecycleState::Fail;
                Observation::Resolve(TransactionOutcome::Fail)
            }
        }
    }
}

/// One lifecycle run against a node.
pub struct TransactionLifecycle<'a> {
    node: &'a dyn NodeApi,
    metadata: &'a NodeMetadata,
    nonces: Option<&'a NonceCache>,
    capacity: usize,
}

impl<'a> TransactionLifecycle<'a> {
    /// Lifecycle over `node`. Without a nonce cache the chain nonce is used
    /// as-is.
    pub fn new(
        node: &'a dyn NodeApi,
        metadata: &'a NodeMetadata,
        nonces: Option<&'a NonceCache>,
    ) -> Self {
        Self {
            node,
            metadata,
            nonces,
            capacity: DEFAULT_STATUS_CAPACITY,
        }
    }

    /// Bound the status stream to `capacity` undelivered updates.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sign, submit and watch `call` until a terminal verdict.
    ///
    /// An explicit `nonce` bypasses the chain query and the cache.
    pub async fn submit(
        &self,
        signer: &dyn Signer,
        call: ResolvedCall,
        nonce: Option<u64>,
    ) -> Result<TransactionResult, HelperError> {
        let name = call.name();
        debug!(call = %name, state = ?LifecycleState::Submitting, "Lifecycle started");

        let nonce = match nonce {
            Some(nonce) => nonce,
            None => self.next_nonce(signer.address()).await?,
        };

        let payload = SignedExtrinsic::signing_payload(&call, nonce);
        let extrinsic = SignedExtrinsic {
            signature: signer.sign(&payload),
            signer: signer.address().to_string(),
            nonce,
            call,
        };

        debug!(call = %name, nonce, signer = %extrinsic.signer, "Submitting extrinsic");
        let mut subscription = self.node.submit_and_watch(extrinsic, self.capacity).await?;

        let mut watcher = StatusWatcher::new();
        debug!(call = %name, state = ?watcher.state(), "Watching status");
        loop {
            let item = subscription.next().await;
            let (outcome, update) = match item {
                Some(Ok(update)) => {
                    debug!(call = %name, status = %update.status, "Status update");
                    match watcher.observe(&update) {
                        Observation::Continue => continue,
                        Observation::Resolve(outcome) => (outcome, update),
                    }
                }
                Some(Err(HelperError::ConnectionFailure(message))) if watcher.seen() > 0 => {
                    warn!(call = %name, error = %message, "Status stream errored");
                    (
                        TransactionOutcome::Fail,
                        StatusUpdate::new(TransactionStatus::StreamError(message)),
                    )
                }
                Some(Err(err)) => {
                    drop(subscription);
                    return Err(err);
                }
                None if watcher.seen() > 0 => {
                    warn!(call = %name, "Status stream closed without a verdict");
                    (
                        TransactionOutcome::Fail,
                        StatusUpdate::new(TransactionStatus::StreamClosed),
                    )
                }
                None => {
                    drop(subscription);
                    return Err(HelperError::ConnectionFailure(format!(
                        "status stream for {name} closed before any status"
                    )));
                }
            };

            drop(subscription);
            let result = self.build_result(outcome, update);
            info!(
                call = %name,
                outcome = %result.outcome,
                status = %result.status,
                events = result.events.len(),
                "Transaction resolved"
            );
            return Ok(result);
        }
    }

    async fn next_nonce(&self, address: &str) -> Result<u64, HelperError> {
        let chain_nonce = self.node.account_nonce(address).await?;
        Ok(match self.nonces {
            Some(cache) => cache.reserve(address, chain_nonce),
            None => chain_nonce,
        })
    }

    fn build_result(&self, outcome: TransactionOutcome, update: StatusUpdate) -> TransactionResult {
        let events = decode_events(&update.events);
        let failure: Option<FailureDetail> = match outcome {
            TransactionOutcome::Fail => Some(failure_for_update(&update, self.metadata)),
            _ => None,
        };
        let block_hash = if update.status.is_finalized() {
            update.status.block_hash()
        } else {
            None
        };

        TransactionResult {
            outcome,
            status: update.status,
            events,
            block_hash,
            failure,
        }
    }
}
