//! # Ports Module
//!
//! Hexagonal architecture ports (inbound API, outbound dependencies).

pub mod inbound;
pub mod outbound;

pub use inbound::TransactionApi;
pub use outbound::{NodeApi, Signer, StatusItem, StatusSubscription};
