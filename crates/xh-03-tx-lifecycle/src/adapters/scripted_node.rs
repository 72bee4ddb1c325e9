//! # Scripted Node
//!
//! In-memory `NodeApi` adapter. Each submission consumes the next script:
//! a sequence of status updates, stream errors, and optionally a hold that
//! keeps the stream open after the last step.

use crate::domain::{HelperError, NodeMetadata, ResolvedCall, SignedExtrinsic, StatusUpdate};
use crate::ports::{NodeApi, StatusItem, StatusSubscription};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

/// One step of a scripted status stream.
#[derive(Clone, Debug)]
pub enum ScriptStep {
    /// Deliver a status update.
    Status(StatusUpdate),
    /// Deliver a stream error.
    Error(HelperError),
    /// Keep the stream open; later deliveries go through
    /// [`ScriptedNode::deliver_late`].
    Hold,
}

/// Response to one submission.
#[derive(Clone, Debug)]
pub enum Script {
    /// Accept and stream the steps.
    Stream(Vec<ScriptStep>),
    /// Reject the submission itself.
    Reject(HelperError),
}

impl Script {
    /// Stream that closes after the last update.
    pub fn statuses(updates: Vec<StatusUpdate>) -> Self {
        Self::Stream(updates.into_iter().map(ScriptStep::Status).collect())
    }

    /// Stream that stays open after the last update.
    pub fn statuses_then_hold(updates: Vec<StatusUpdate>) -> Self {
        let mut steps: Vec<_> = updates.into_iter().map(ScriptStep::Status).collect();
        steps.push(ScriptStep::Hold);
        Self::Stream(steps)
    }
}

type Senders = Arc<Mutex<Vec<mpsc::Sender<StatusItem>>>>;

/// Scripted node.
pub struct ScriptedNode {
    metadata: NodeMetadata,
    nonces: Mutex<HashMap<String, u64>>,
    queries: Mutex<HashMap<String, Value>>,
    scripts: Mutex<VecDeque<Script>>,
    submitted: Mutex<Vec<SignedExtrinsic>>,
    held: Senders,
    capacities: Mutex<Vec<usize>>,
}

impl ScriptedNode {
    /// Node serving `metadata`.
    pub fn new(metadata: NodeMetadata) -> Self {
        Self {
            metadata,
            nonces: Mutex::new(HashMap::new()),
            queries: Mutex::new(HashMap::new()),
            scripts: Mutex::new(VecDeque::new()),
            submitted: Mutex::new(Vec::new()),
            held: Arc::new(Mutex::new(Vec::new())),
            capacities: Mutex::new(Vec::new()),
        }
    }

    /// Queue the response to the next submission.
    pub fn push_script(&self, script: Script) {
        self.scripts.lock().push_back(script);
    }

    /// Chain-side nonce reported for `address`.
    pub fn set_nonce(&self, address: &str, nonce: u64) {
        self.nonces.lock().insert(address.to_string(), nonce);
    }

    /// Response for a query or RPC call, keyed by its dotted name.
    pub fn set_query(&self, name: &str, response: Value) {
        self.queries.lock().insert(name.to_string(), response);
    }

    /// Every extrinsic submitted so far, in order.
    pub fn submitted(&self) -> Vec<SignedExtrinsic> {
        self.submitted.lock().clone()
    }

    /// Push an update to every held stream. Returns how many streams
    /// accepted it; a dropped subscription accepts nothing.
    pub fn deliver_late(&self, update: StatusUpdate) -> usize {
        let held = self.held.lock();
        held.iter()
            .filter(|sender| sender.try_send(Ok(update.clone())).is_ok())
            .count()
    }

    /// Capacity of every status stream opened so far, in order.
    pub fn stream_capacities(&self) -> Vec<usize> {
        self.capacities.lock().clone()
    }

    /// Streams parked by a `Hold` step, listening or not.
    pub fn held_streams(&self) -> usize {
        self.held.lock().len()
    }

    /// Held streams whose subscriber is still listening.
    pub fn open_streams(&self) -> usize {
        self.held.lock().iter().filter(|s| !s.is_closed()).count()
    }
}

#[async_trait]
impl NodeApi for ScriptedNode {
    async fn metadata(&self) -> Result<NodeMetadata, HelperError> {
        Ok(self.metadata.clone())
    }

    async fn account_nonce(&self, address: &str) -> Result<u64, HelperError> {
        Ok(self.nonces.lock().get(address).copied().unwrap_or(0))
    }

    async fn query(&self, call: &ResolvedCall) -> Result<Value, HelperError> {
        let name = call.name();
        Ok(self.queries.lock().get(&name).cloned().unwrap_or(Value::Null))
    }

    async fn submit_and_watch(
        &self,
        extrinsic: SignedExtrinsic,
        capacity: usize,
    ) -> Result<StatusSubscription, HelperError> {
        let script = self.scripts.lock().pop_front().ok_or_else(|| {
            HelperError::ConnectionFailure("no scripted response for submission".to_string())
        })?;
        let steps = match script {
            Script::Reject(err) => return Err(err),
            Script::Stream(steps) => steps,
        };

        let label = format!("{}#{}", extrinsic.call.name(), extrinsic.nonce);
        debug!(call = %extrinsic.call.name(), nonce = extrinsic.nonce, "Scripted submission");
        self.submitted.lock().push(extrinsic);

        let (sender, subscription) = StatusSubscription::channel(capacity, label);
        self.capacities.lock().push(subscription.capacity());
        let held = Arc::clone(&self.held);
        tokio::spawn(async move {
            for step in steps {
                let item = match step {
                    ScriptStep::Status(update) => Ok(update),
                    ScriptStep::Error(err) => Err(err),
                    ScriptStep::Hold => {
                        held.lock().push(sender);
                        return;
                    }
                };
                if sender.send(item).await.is_err() {
                    return;
                }
            }
        });

        Ok(subscription)
    }
}
