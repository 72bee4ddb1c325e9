//! # Integration Test Flows
//!
//! Tests that the address codec, the event decoder and the transaction
//! lifecycle work together through one `HelperSession`.
//!
//! ## Flows Tested:
//!
//! 1. **Transfer recipient check**: decoded event payload compared to an
//!    expected `CrossIdentity` with owner equality
//! 2. **Nesting**: token owners addressed by synthetic mirror addresses
//! 3. **Nonce burst**: sequential nonces without a chain refresh
//! 4. **Failure paths**: module errors, domain signals, must-succeed
//! 5. **Call log**: every call recorded, in order, per session

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use helper_telemetry::{init_telemetry, TelemetryConfig};
    use primitive_types::U256;
    use serde_json::json;
    use xh_01_address_codec::{
        token_id_from_address, token_id_to_address, CrossIdentity, IdentitySpace,
    };
    use xh_02_event_decoder::{DecodedValue, RawValue, TypeDescriptor};
    use xh_03_tx_lifecycle::{
        CallDescriptor, CallKind, FailureDetail, HelperError, Signer, SubmitOptions,
        TransactionApi, TransactionOutcome, TransactionStatus,
    };

    fn init_logging() {
        // Another test may have installed the subscriber already
        let _ = init_telemetry(&TelemetryConfig {
            log_level: "debug".to_string(),
            console_output: false,
            ..Default::default()
        });
    }

    // =============================================================================
    // TRANSFER RECIPIENT CHECK
    // =============================================================================

    #[tokio::test]
    async fn test_transfer_to_mirror_recipient() {
        init_logging();
        let node = node();
        let session = connect(&node).await;
        let alice = signer(1);
        let bob = signer(2);

        // Node reports the recipient lower-cased; callers hold it checksummed
        let expected = bob.identity().to_mirror().unwrap();
        let reported = expected.normalize(session.prefix()).unwrap();

        node.push_script(finalized(vec![
            event(
                "common",
                "Transfer",
                vec![
                    RawValue::Uint(7),
                    RawValue::Uint(1),
                    identity_value(&alice.identity()),
                    identity_value(&reported),
                    RawValue::Text("1,000,000,000,000,000,000".to_string()),
                ],
                vec![
                    Some(TypeDescriptor::U32),
                    Some(TypeDescriptor::U32),
                    None,
                    None,
                    Some(TypeDescriptor::U128),
                ],
            ),
            extrinsic_success(),
        ]));

        let result = session
            .execute_extrinsic(
                &alice,
                CallDescriptor::tx(
                    "unique",
                    "transfer",
                    vec![json!({ "Ethereum": expected.as_str() }), json!(7), json!(1), json!(1)],
                ),
                SubmitOptions::default(),
            )
            .await
            .unwrap();

        assert_eq!(result.outcome, TransactionOutcome::Success);
        assert_eq!(result.block_hash, Some(BLOCK));

        let transfer = result.find_event("common", "Transfer").unwrap();
        assert_eq!(transfer.field(0), Some(&DecodedValue::Int(7)));
        assert_eq!(
            transfer.field(4).and_then(DecodedValue::as_u256),
            Some(U256::exp10(18))
        );

        let from = CrossIdentity::from_value(transfer.field(2).unwrap().as_human().unwrap()).unwrap();
        let to = CrossIdentity::from_value(transfer.field(3).unwrap().as_human().unwrap()).unwrap();
        assert_eq!(from.space(), IdentitySpace::Native);
        assert_eq!(to.space(), IdentitySpace::Mirror);

        // Structurally different, same owner
        assert_ne!(to, expected);
        assert!(to.same_owner(&expected, session.prefix()).unwrap());
        assert!(from.same_owner(&alice.identity(), session.prefix()).unwrap());
        assert!(!to.same_owner(&from, session.prefix()).unwrap());
    }

    #[tokio::test]
    async fn test_native_recipient_under_other_prefix() {
        let node = node();
        let session = connect(&node).await;
        let alice = signer(1);
        let bob = signer(2);

        let polkadot = xh_01_address_codec::NetworkPrefix::new(0).unwrap();
        let reported = bob.identity().normalize(polkadot).unwrap();
        assert_ne!(reported, bob.identity());

        node.push_script(finalized(vec![
            event(
                "balances",
                "Transfer",
                vec![
                    identity_value(&alice.identity()),
                    identity_value(&reported),
                    RawValue::Uint(500),
                ],
                vec![None, None, Some(TypeDescriptor::U128)],
            ),
            extrinsic_success(),
        ]));

        let result = session
            .execute_extrinsic(
                &alice,
                CallDescriptor::tx("balances", "transfer", vec![json!(bob.address()), json!(500)]),
                SubmitOptions::default(),
            )
            .await
            .unwrap();

        let transfer = result.find_event("balances", "Transfer").unwrap();
        let to = CrossIdentity::from_value(transfer.field(1).unwrap().as_human().unwrap()).unwrap();
        assert!(to.same_owner(&bob.identity(), session.prefix()).unwrap());
        assert_eq!(to.normalize(session.prefix()).unwrap(), bob.identity());
    }

    // =============================================================================
    // NESTING
    // =============================================================================

    #[tokio::test]
    async fn test_nest_token_under_token() {
        let node = node();
        let session = connect(&node).await;
        let alice = signer(1);

        let parent = CrossIdentity::mirror(token_id_to_address(7, 1)).unwrap();
        node.push_script(finalized(vec![
            event(
                "common",
                "Transfer",
                vec![
                    RawValue::Uint(7),
                    RawValue::Uint(2),
                    identity_value(&alice.identity()),
                    identity_value(&parent),
                    RawValue::Uint(1),
                ],
                vec![
                    Some(TypeDescriptor::U32),
                    Some(TypeDescriptor::U32),
                    None,
                    None,
                    Some(TypeDescriptor::U128),
                ],
            ),
            extrinsic_success(),
        ]));

        let result = session
            .execute_extrinsic(
                &alice,
                CallDescriptor::tx(
                    "unique",
                    "transfer",
                    vec![json!({ "Ethereum": parent.as_str() }), json!(7), json!(2), json!(1)],
                ),
                SubmitOptions::default(),
            )
            .await
            .unwrap();

        let transfer = result.find_event("common", "Transfer").unwrap();
        let owner = CrossIdentity::from_value(transfer.field(3).unwrap().as_human().unwrap()).unwrap();
        assert_eq!(token_id_from_address(owner.as_str()).unwrap(), (7, 1));
    }

    // =============================================================================
    // NONCES
    // =============================================================================

    #[tokio::test]
    async fn test_nonce_burst_is_sequential() {
        let node = node();
        let session = connect(&node).await;
        let alice = signer(1);
        node.set_nonce(alice.address(), 7);

        for _ in 0..3 {
            node.push_script(finalized(vec![extrinsic_success()]));
            session
                .execute_extrinsic(
                    &alice,
                    CallDescriptor::tx("balances", "transfer", vec![]),
                    SubmitOptions::default(),
                )
                .await
                .unwrap();
        }

        // A second session keeps its own cache
        let other = connect(&node).await;
        node.push_script(finalized(vec![extrinsic_success()]));
        other
            .execute_extrinsic(
                &alice,
                CallDescriptor::tx("balances", "transfer", vec![]),
                SubmitOptions::default(),
            )
            .await
            .unwrap();

        let nonces: Vec<_> = node.submitted().iter().map(|x| x.nonce).collect();
        assert_eq!(nonces, vec![7, 8, 9, 7]);
    }

    #[tokio::test]
    async fn test_signers_run_independently() {
        let node = node();
        let session = connect(&node).await;
        let alice = signer(1);
        let bob = signer(2);
        node.push_script(finalized(vec![extrinsic_success()]));
        node.push_script(finalized(vec![extrinsic_success()]));

        let call = || CallDescriptor::tx("balances", "transfer", vec![]);
        let (a, b) = tokio::join!(
            session.execute_extrinsic(&alice, call(), SubmitOptions::default()),
            session.execute_extrinsic(&bob, call(), SubmitOptions::default()),
        );
        assert!(a.unwrap().is_success());
        assert!(b.unwrap().is_success());

        let submitted = node.submitted();
        assert_eq!(submitted.len(), 2);
        assert!(submitted.iter().all(|x| x.nonce == 0));
        assert_eq!(session.call_log().len(), 2);
    }

    // =============================================================================
    // FAILURE PATHS
    // =============================================================================

    #[tokio::test]
    async fn test_module_error_detail_from_failed_event() {
        init_logging();
        let node = node();
        let session = connect(&node).await;
        node.push_script(in_block(vec![extrinsic_failed_module(66, 3)]));

        let err = session
            .execute_extrinsic(
                &signer(1),
                CallDescriptor::tx("unique", "transfer", vec![]),
                SubmitOptions::default(),
            )
            .await
            .unwrap_err();

        match err {
            HelperError::ChainDispatchFailure { detail, result } => {
                assert_eq!(detail.to_string(), "common.CollectionNotFound");
                assert_eq!(result.status, TransactionStatus::InBlock(BLOCK));
                assert_eq!(result.block_hash, None);
                assert_eq!(result.events.len(), 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_failed_result_returned_when_not_required() {
        let node = node();
        let session = connect(&node).await;
        node.push_script(in_block(vec![extrinsic_failed_module(5, 2)]));

        let result = session
            .execute_extrinsic(
                &signer(1),
                CallDescriptor::tx("balances", "transfer", vec![]),
                SubmitOptions::default().must_succeed(false),
            )
            .await
            .unwrap();

        assert_eq!(result.outcome, TransactionOutcome::Fail);
        assert_eq!(
            result.failure,
            Some(FailureDetail::Module {
                section: "balances".to_string(),
                name: "InsufficientBalance".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_missing_success_event_is_failure() {
        let node = node();
        let session = connect(&node).await;
        node.push_script(finalized(vec![event("balances", "Transfer", vec![], vec![])]));

        let err = session
            .execute_extrinsic(
                &signer(1),
                CallDescriptor::tx("balances", "transfer", vec![]),
                SubmitOptions::default(),
            )
            .await
            .unwrap_err();
        let result = err.result().unwrap();
        assert_eq!(result.outcome, TransactionOutcome::Fail);
        assert!(matches!(result.failure, Some(FailureDetail::BareStatus(_))));
    }

    #[tokio::test]
    async fn test_created_failed_is_domain_signal() {
        let node = node();
        let session = connect(&node).await;
        node.push_script(finalized(vec![
            event("evm", "CreatedFailed", vec![], vec![]),
            extrinsic_success(),
        ]));

        let err = session
            .execute_extrinsic(
                &signer(1),
                CallDescriptor::tx("evm", "call", vec![]),
                SubmitOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(matches!(
            &err,
            HelperError::DomainSignal { method, .. } if method == "CreatedFailed"
        ));
        assert!(err.result().unwrap().is_success());
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_unknown_call_and_bad_address() {
        let node = node();
        let session = connect(&node).await;

        let err = session
            .execute_extrinsic(
                &signer(1),
                CallDescriptor::tx("unique", "burn_everything", vec![]),
                SubmitOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, HelperError::CallNotFound { .. }));

        let err: HelperError = CrossIdentity::mirror("0x1234").unwrap_err().into();
        assert!(matches!(err, HelperError::InvalidArgument(_)));
    }

    // =============================================================================
    // CALL LOG
    // =============================================================================

    #[tokio::test]
    async fn test_call_log_records_session() {
        let node = node();
        let session = connect(&node).await;
        let alice = signer(1);
        node.set_query("rpc.system.chain", json!("Development"));
        node.push_script(finalized(vec![extrinsic_success()]));
        node.push_script(in_block(vec![extrinsic_failed_module(66, 4)]));

        let chain = session
            .call_query(CallDescriptor::rpc("system", "chain", vec![]))
            .await
            .unwrap();
        assert_eq!(chain, json!("Development"));

        session
            .execute_extrinsic(
                &alice,
                CallDescriptor::tx("balances", "transfer", vec![json!(1)]),
                SubmitOptions::default(),
            )
            .await
            .unwrap();
        let _ = session
            .execute_extrinsic(
                &alice,
                CallDescriptor::tx("unique", "create_item", vec![]),
                SubmitOptions::default(),
            )
            .await;

        let records = session.call_log().records();
        let calls: Vec<_> = records.iter().map(|r| r.call.as_str()).collect();
        assert_eq!(
            calls,
            vec!["rpc.system.chain", "tx.balances.transfer", "tx.unique.create_item"]
        );
        assert_eq!(records[0].kind, CallKind::Rpc);
        assert_eq!(records[1].outcome, Some(TransactionOutcome::Success));
        assert_eq!(records[2].module_error.as_deref(), Some("common.NoPermission"));

        let json = session.call_log().to_json();
        assert_eq!(json.as_array().map(Vec::len), Some(3));
        assert_eq!(json[1]["signer"], json!(alice.address()));

        session.call_log().clear();
        assert!(session.call_log().is_empty());
    }
}
