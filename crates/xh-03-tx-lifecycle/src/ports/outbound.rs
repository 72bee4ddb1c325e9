//! # Outbound Ports
//!
//! Traits for external dependencies (the node, a signing keyring).

use crate::domain::{HelperError, NodeMetadata, ResolvedCall, SignedExtrinsic, StatusUpdate};
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::debug;

/// Item delivered on a status stream.
pub type StatusItem = Result<StatusUpdate, HelperError>;

/// Node connection - outbound port.
///
/// Shared by every lifecycle of a session; implementations must not keep
/// per-call state beyond the subscriptions they hand out.
#[async_trait]
pub trait NodeApi: Send + Sync {
    /// Metadata snapshot (call surface, module errors).
    async fn metadata(&self) -> Result<NodeMetadata, HelperError>;

    /// Next account nonce as the chain sees it.
    async fn account_nonce(&self, address: &str) -> Result<u64, HelperError>;

    /// Run a query or RPC call.
    async fn query(&self, call: &ResolvedCall) -> Result<Value, HelperError>;

    /// Submit a signed extrinsic and subscribe to its status. The stream
    /// buffers at most `capacity` undelivered updates.
    async fn submit_and_watch(
        &self,
        extrinsic: SignedExtrinsic,
        capacity: usize,
    ) -> Result<StatusSubscription, HelperError>;
}

/// Signing capability - outbound port.
pub trait Signer: Send + Sync {
    /// Native-space address of the signing account.
    fn address(&self) -> &str;

    /// Sign a payload.
    fn sign(&self, payload: &[u8]) -> Vec<u8>;
}

/// Status stream for one submitted extrinsic.
///
/// When dropped, the subscription is closed and the node can no longer
/// deliver to it.
pub struct StatusSubscription {
    receiver: mpsc::Receiver<StatusItem>,
    capacity: usize,
    label: String,
}

impl StatusSubscription {
    /// Bounded channel pair: the node keeps the sender.
    pub fn channel(capacity: usize, label: impl Into<String>) -> (mpsc::Sender<StatusItem>, Self) {
        let capacity = capacity.max(1);
        let (sender, receiver) = mpsc::channel(capacity);
        (
            sender,
            Self {
                receiver,
                capacity,
                label: label.into(),
            },
        )
    }

    /// Next status, in node order. `None` once the node closed the stream.
    pub async fn next(&mut self) -> Option<StatusItem> {
        self.receiver.recv().await
    }

    /// Bound on undelivered updates.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Subscription label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Drop for StatusSubscription {
    fn drop(&mut self) {
        self.receiver.close();
        debug!(subscription = %self.label, "Status subscription dropped");
    }
}
