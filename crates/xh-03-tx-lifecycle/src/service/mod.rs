//! Service Layer
//!
//! Application services that orchestrate domain logic and coordinate with
//! the node through ports.

pub mod call_log;
pub mod lifecycle;
pub mod nonce;
pub mod session;

pub use call_log::{CallLog, CallRecord};
pub use lifecycle::{Observation, StatusWatcher, TransactionLifecycle};
pub use nonce::NonceCache;
pub use session::{HelperSession, DOMAIN_FAILURE_EVENTS};
