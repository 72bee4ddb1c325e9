//! # Test Fixtures
//!
//! Node metadata, signers and event builders shared by the flows.

use primitive_types::H256;
use std::sync::Arc;
use xh_01_address_codec::{CrossIdentity, NetworkPrefix};
use xh_02_event_decoder::{EventIndex, EventRecord, RawEvent, RawValue, TypeDescriptor};
use xh_03_tx_lifecycle::{
    CallKind, Ed25519Signer, HelperConfig, HelperSession, NodeMetadata, Script, ScriptedNode,
    StatusUpdate, TransactionStatus,
};

/// Hash of the block every scripted extrinsic lands in.
pub const BLOCK: H256 = H256([0xB1; 32]);

/// Call surface and module errors of the scripted node.
pub fn metadata() -> NodeMetadata {
    NodeMetadata::default()
        .with_call(CallKind::Tx, "balances", "transfer", (5, 0))
        .with_call(CallKind::Tx, "unique", "transfer", (66, 5))
        .with_call(CallKind::Tx, "unique", "create_item", (66, 3))
        .with_call(CallKind::Tx, "evm", "call", (100, 0))
        .with_call(CallKind::Query, "system", "account", (0, 0))
        .with_call(CallKind::Rpc, "system", "chain", (0, 0))
        .with_error(5, 2, "balances", "InsufficientBalance")
        .with_error(66, 3, "common", "CollectionNotFound")
        .with_error(66, 4, "common", "NoPermission")
}

/// Scripted node serving [`metadata`].
pub fn node() -> Arc<ScriptedNode> {
    Arc::new(ScriptedNode::new(metadata()))
}

/// Session with default configuration.
pub async fn connect(node: &Arc<ScriptedNode>) -> HelperSession<ScriptedNode> {
    HelperSession::connect(Arc::clone(node), HelperConfig::default())
        .await
        .expect("default config connects")
}

/// Deterministic signer from a one-byte seed.
pub fn signer(seed: u8) -> Ed25519Signer {
    Ed25519Signer::from_seed([seed; 32], NetworkPrefix::GENERIC).expect("generic prefix")
}

/// Identity as the node renders it inside an event.
pub fn identity_value(identity: &CrossIdentity) -> RawValue {
    let name = match identity {
        CrossIdentity::Native(_) => "Substrate",
        CrossIdentity::Mirror(_) => "Ethereum",
    };
    RawValue::Variant {
        name: name.to_string(),
        value: Box::new(RawValue::Text(identity.as_str().to_string())),
    }
}

/// Event emitted by extrinsic 1.
pub fn event(
    section: &str,
    method: &str,
    data: Vec<RawValue>,
    type_defs: Vec<Option<TypeDescriptor>>,
) -> EventRecord {
    EventRecord::apply_extrinsic(
        1,
        RawEvent::new(section, method, EventIndex::Pair(0, 0), data).with_type_defs(type_defs),
    )
}

/// `system.ExtrinsicSuccess`.
pub fn extrinsic_success() -> EventRecord {
    event("system", "ExtrinsicSuccess", vec![], vec![])
}

/// `system.ExtrinsicFailed` carrying a module error.
pub fn extrinsic_failed_module(pallet_index: u8, error_index: u8) -> EventRecord {
    let dispatch_error = RawValue::Variant {
        name: "Module".to_string(),
        value: Box::new(RawValue::Composite(vec![
            ("index".to_string(), RawValue::Uint(pallet_index.into())),
            (
                "error".to_string(),
                RawValue::Text(format!("0x{:02x}000000", error_index)),
            ),
        ])),
    };
    event("system", "ExtrinsicFailed", vec![dispatch_error], vec![])
}

/// Ready, in block, finalized; the events ride on the included statuses.
pub fn finalized(events: Vec<EventRecord>) -> Script {
    Script::statuses(vec![
        StatusUpdate::new(TransactionStatus::Ready),
        StatusUpdate::new(TransactionStatus::Broadcast),
        StatusUpdate::new(TransactionStatus::InBlock(BLOCK)).with_events(events.clone()),
        StatusUpdate::new(TransactionStatus::Finalized(BLOCK)).with_events(events),
    ])
}

/// Ready, then in block with the given events.
pub fn in_block(events: Vec<EventRecord>) -> Script {
    Script::statuses(vec![
        StatusUpdate::new(TransactionStatus::Ready),
        StatusUpdate::new(TransactionStatus::InBlock(BLOCK)).with_events(events),
    ])
}
