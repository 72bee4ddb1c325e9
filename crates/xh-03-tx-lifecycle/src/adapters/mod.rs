//! # Adapters Module
//!
//! Concrete implementations of the outbound ports plus the call table.

pub mod call_table;
pub mod ed25519_signer;
pub mod scripted_node;

pub use call_table::CallTable;
pub use ed25519_signer::{verify_signature, Ed25519Signer};
pub use scripted_node::{Script, ScriptStep, ScriptedNode};
