//! # Nonce Cache
//!
//! Per-signer next-nonce bookkeeping for one session, so that a burst of
//! calls issued before the chain nonce refreshes still gets sequential
//! nonces. Not shared between sessions.

use parking_lot::Mutex;
use std::collections::HashMap;

/// Next nonce per signer address.
#[derive(Debug, Default)]
pub struct NonceCache {
    next: Mutex<HashMap<String, u64>>,
}

impl NonceCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the nonce to use: `max(chain, cached next)`. The cached next
    /// nonce becomes the taken one plus one.
    pub fn reserve(&self, address: &str, chain_nonce: u64) -> u64 {
        let mut next = self.next.lock();
        let entry = next.entry(address.to_string()).or_insert(chain_nonce);
        let nonce = (*entry).max(chain_nonce);
        *entry = nonce.saturating_add(1);
        nonce
    }

    /// Cached next nonce.
    pub fn peek(&self, address: &str) -> Option<u64> {
        self.next.lock().get(address).copied()
    }

    /// Forget one signer.
    pub fn forget(&self, address: &str) {
        self.next.lock().remove(address);
    }

    /// Forget every signer.
    pub fn clear(&self) {
        self.next.lock().clear();
    }
}
